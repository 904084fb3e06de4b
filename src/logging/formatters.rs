use super::{LogFormatter, LogRecord};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `[<timestamp>] [<LEVEL>] [<module>] <message>`.
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self {}
    }

    fn timestamp(&self, record: &LogRecord) -> String {
        record.timestamp().format(DATETIME_FORMAT).to_string()
    }
}

impl LogFormatter for DefaultFormatter {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp(record),
            record.severity().label(),
            record.module(),
            record.message(),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::logging::Severity;

    fn fixed_record(severity: Severity, message: &str, module: Option<&str>) -> LogRecord {
        let ts = Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .expect("unambiguous local time");
        LogRecord::at(severity, message, module, ts)
    }

    #[test]
    fn renders_canonical_line() {
        let formatter = DefaultFormatter::new();
        let record = fixed_record(Severity::Warning, "Low disk space", Some("disk"));

        assert_eq!(
            formatter.format(&record),
            "[2024-03-07 09:05:02] [WARNING] [disk] Low disk space"
        );
    }

    #[test]
    fn renders_default_module() {
        let formatter = DefaultFormatter::new();
        let record = fixed_record(Severity::Debug, "probe", None);

        assert_eq!(
            formatter.format(&record),
            "[2024-03-07 09:05:02] [DEBUG] [__main__] probe"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let formatter = DefaultFormatter::new();
        let record = fixed_record(Severity::Error, "Disk failure", Some("disk"));

        assert_eq!(formatter.format(&record), formatter.format(&record));
    }
}

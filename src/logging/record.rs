use chrono::{DateTime, Local};

use super::Severity;

pub const DEFAULT_MODULE: &str = "__main__";

/// A single log event. Built only after the record passed the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    severity: Severity,
    message: String,
    module: String,
    timestamp: DateTime<Local>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>, module: Option<&str>) -> Self {
        Self::at(severity, message, module, Local::now())
    }

    pub fn at(
        severity: Severity,
        message: impl Into<String>,
        module: Option<&str>,
        timestamp: DateTime<Local>,
    ) -> Self {
        let module = match module {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_MODULE,
        };

        Self {
            severity,
            message: message.into(),
            module: module.to_string(),
            timestamp,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

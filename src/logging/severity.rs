use std::{fmt, str::FromStr};

use crate::error::Error;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// One step toward `Debug`, saturating.
    pub fn more_verbose(self) -> Self {
        match self {
            Severity::Debug | Severity::Info => Severity::Debug,
            Severity::Warning => Severity::Info,
            Severity::Error => Severity::Warning,
        }
    }
}

/// Returns true when a record at `severity` passes `threshold`.
pub fn accepts(severity: Severity, threshold: Severity) -> bool {
    severity.rank() >= threshold.rank()
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Self, Error> {
        Severity::ALL
            .into_iter()
            .find(|s| s.rank() == rank)
            .ok_or_else(|| Error::UnknownSeverity(rank.to_string()))
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => log::LevelFilter::Trace,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warning => log::LevelFilter::Warn,
            Severity::Error => log::LevelFilter::Error,
        }
    }
}

use clap::Args;
use eyre::Context;

use linelog::{Logger, Severity};

/// (severity, message, module) pairs logged before and after raising the
/// threshold to WARNING.
const BEFORE: &[(Severity, &str, &str)] = &[
    (Severity::Debug, "This message should not be logged", "main"),
    (Severity::Info, "Starting application", "main"),
    (Severity::Warning, "Low disk space", "disk"),
    (Severity::Error, "Failed to open file", "file"),
    (Severity::Info, "Exiting application", "main"),
];

const AFTER: &[(Severity, &str, &str)] = &[
    (Severity::Info, "This message should not be logged", "main"),
    (Severity::Warning, "Connection lost", "network"),
    (Severity::Error, "Disk failure", "disk"),
];

#[derive(Args, Debug)]
pub struct Cmd {}

impl Cmd {
    pub fn run(&self, mut logger: Logger) -> eyre::Result<()> {
        for (severity, message, module) in BEFORE {
            logger.log(*severity, message, Some(*module))?;
        }

        logger.set_threshold(Severity::Warning);

        for (severity, message, module) in AFTER {
            logger.log(*severity, message, Some(*module))?;
        }

        logger.shutdown().wrap_err("Failed flushing log sinks")
    }
}

use std::sync::{Mutex, MutexGuard};

use eyre::Context;
use log::{Log, Metadata, Record};

use crate::error::{Error, Result};

use super::{accepts, Logger, Severity};

/// Adapts a [`Logger`] to the `log` facade so `log::info!` and friends reach it.
pub struct LogBridge {
    logger: Mutex<Logger>,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Registers the bridge as the process-wide `log` backend.
    pub fn install(self) -> eyre::Result<()> {
        let threshold = self.lock().threshold();
        log::set_max_level(threshold.into());
        log::set_boxed_logger(Box::new(self)).context("Failed registering boxed logger")
    }

    pub fn set_threshold(&self, threshold: Severity) {
        self.lock().set_threshold(threshold);
    }

    pub fn into_inner(self) -> Logger {
        match self.logger.into_inner() {
            Ok(logger) => logger,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Logger> {
        match self.logger.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn forward(&self, record: &Record) -> Result<()> {
        let message = record.args().to_string();
        self.lock()
            .log(record.level().into(), &message, Some(record.target()))
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        accepts(metadata.level().into(), self.lock().threshold())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Err(err) = self.forward(record) {
            report(&err);
        }
    }

    fn flush(&self) {
        if let Err(err) = self.lock().flush() {
            report(&err);
        }
    }
}

fn report(err: &Error) {
    match std::error::Error::source(err) {
        Some(cause) => eprintln!("linelog: {}: {}", err, cause),
        None => eprintln!("linelog: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use log::{Level, Metadata, Record};

    use super::*;
    use crate::logging::{Builder, MemorySink};

    fn bridge(threshold: Severity) -> (LogBridge, MemorySink) {
        let memory = MemorySink::new();
        let logger = Builder::new()
            .with_threshold(threshold)
            .with_sink(memory.clone())
            .build()
            .unwrap();
        (LogBridge::new(logger), memory)
    }

    #[test]
    fn maps_facade_levels_and_targets() {
        let (bridge, memory) = bridge(Severity::Debug);

        bridge.log(
            &Record::builder()
                .level(Level::Warn)
                .target("network")
                .args(format_args!("Connection lost"))
                .build(),
        );
        bridge.log(
            &Record::builder()
                .level(Level::Trace)
                .target("probe")
                .args(format_args!("tick {}", 1))
                .build(),
        );

        let lines = memory.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] [WARNING] [network] Connection lost"));
        assert!(lines[1].ends_with("] [DEBUG] [probe] tick 1"));
    }

    #[test]
    fn applies_threshold_to_facade_records() {
        let (bridge, memory) = bridge(Severity::Info);

        let metadata = Metadata::builder()
            .level(Level::Debug)
            .target("main")
            .build();
        assert!(!bridge.enabled(&metadata));
        bridge.log(
            &Record::builder()
                .level(Level::Debug)
                .target("main")
                .args(format_args!("hidden"))
                .build(),
        );

        bridge.set_threshold(Severity::Error);
        bridge.log(
            &Record::builder()
                .level(Level::Warn)
                .target("main")
                .args(format_args!("hidden too"))
                .build(),
        );

        assert!(memory.lines().is_empty());
        assert_eq!(bridge.into_inner().threshold(), Severity::Error);
    }
}

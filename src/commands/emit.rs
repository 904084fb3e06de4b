use clap::Args;
use eyre::Context;

use linelog::{logging::DEFAULT_MODULE, LogBridge, Logger, Severity};

#[derive(Args, Debug)]
pub struct Cmd {
    #[arg(index = 1, help = "The message to log.")]
    pub message: String,

    #[arg(short, long, default_value = "info", help = "Severity of the record.")]
    pub level: Severity,

    #[arg(short, long, help = "Originating module name. Defaults to __main__.")]
    pub module: Option<String>,

    #[arg(long, help = "Route the record through the log crate macros.")]
    pub via_log: bool,
}

impl Cmd {
    pub fn run(&self, mut logger: Logger) -> eyre::Result<()> {
        if self.via_log {
            return self.run_via_log(logger);
        }

        logger
            .log(self.level, &self.message, self.module.as_deref())
            .wrap_err("Failed emitting log record")?;
        logger.shutdown().wrap_err("Failed flushing log sinks")
    }

    fn run_via_log(&self, logger: Logger) -> eyre::Result<()> {
        LogBridge::new(logger).install()?;

        let level: log::Level = self.level.into();
        let target = self.module.as_deref().unwrap_or(DEFAULT_MODULE);

        log::log!(target: target, level, "{}", self.message);
        log::logger().flush();
        Ok(())
    }
}

mod bridge;
mod formatters;
mod logger;
mod record;
mod severity;
mod sinks;

use std::io;

pub use bridge::LogBridge;
pub use formatters::{DefaultFormatter, DATETIME_FORMAT};
pub use logger::{Builder, Logger};
pub use record::{LogRecord, DEFAULT_MODULE};
pub use severity::{accepts, Severity};
pub use sinks::{ConsoleSink, ConsoleTarget, FileSink, MemorySink};

pub trait LogFormatter: Send {
    fn format(&self, record: &LogRecord) -> String;
}

/// A destination for rendered lines. Each call to `write_line` is one record.
pub trait LogSink: Send {
    fn name(&self) -> &str;
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

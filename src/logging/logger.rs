use std::path::PathBuf;

use crate::{
    config::Config,
    error::{Error, Result},
};

use super::{
    accepts,
    formatters::DefaultFormatter,
    sinks::{ConsoleSink, ConsoleTarget, FileSink},
    LogFormatter, LogRecord, LogSink, Severity,
};

/// Filters records against a threshold, renders them once and writes the line
/// to every sink in registration order.
pub struct Logger {
    threshold: Severity,
    sinks: Vec<Box<dyn LogSink>>,
    formatter: Box<dyn LogFormatter>,
}

impl Logger {
    /// Console sink always, file sink when `config.log_to_file` is set.
    pub fn new(config: &Config) -> Result<Self> {
        Builder::from_config(config).build()
    }

    pub fn log(&mut self, severity: Severity, message: &str, module: Option<&str>) -> Result<()> {
        if !accepts(severity, self.threshold) {
            return Ok(());
        }

        let record = LogRecord::new(severity, message, module);
        let line = self.formatter.format(&record);

        let mut failure = None;
        for sink in self.sinks.iter_mut() {
            if let Err(source) = sink.write_line(&line) {
                failure.get_or_insert(Error::Write {
                    sink: sink.name().to_string(),
                    source,
                });
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn debug(&mut self, message: &str, module: Option<&str>) -> Result<()> {
        self.log(Severity::Debug, message, module)
    }

    pub fn info(&mut self, message: &str, module: Option<&str>) -> Result<()> {
        self.log(Severity::Info, message, module)
    }

    pub fn warning(&mut self, message: &str, module: Option<&str>) -> Result<()> {
        self.log(Severity::Warning, message, module)
    }

    pub fn error(&mut self, message: &str, module: Option<&str>) -> Result<()> {
        self.log(Severity::Error, message, module)
    }

    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    pub fn flush(&mut self) -> Result<()> {
        let mut failure = None;
        for sink in self.sinks.iter_mut() {
            if let Err(source) = sink.flush() {
                failure.get_or_insert(Error::Write {
                    sink: sink.name().to_string(),
                    source,
                });
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Flushes every sink and releases them.
    pub fn shutdown(mut self) -> Result<()> {
        let result = self.flush();
        self.sinks.clear();
        result
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for sink in self.sinks.iter_mut() {
            let _ = sink.flush();
        }
    }
}

type SinkConstructor = Box<dyn FnOnce() -> Result<Box<dyn LogSink>>>;

pub struct Builder {
    threshold: Severity,
    constructors: Vec<SinkConstructor>,
    formatter_builder: Box<dyn FnOnce() -> Box<dyn LogFormatter>>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            threshold: Severity::default(),
            constructors: Vec::new(),
            formatter_builder: Box::new(|| Box::new(DefaultFormatter::new())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let builder = Self::new()
            .with_threshold(config.threshold)
            .with_console_sink(config.console, config.single_line);

        if config.log_to_file {
            builder.with_file_sink(config.file_path.clone())
        } else {
            builder
        }
    }

    pub fn with_threshold(self, threshold: Severity) -> Self {
        Self { threshold, ..self }
    }

    /// `single_line` is ignored unless `target` is a terminal.
    pub fn with_console_sink(self, target: ConsoleTarget, single_line: bool) -> Self {
        self.with_constructor(Box::new(move || {
            let sink = ConsoleSink::new(target).with_single_line(single_line);
            Ok(Box::new(sink))
        }))
    }

    pub fn with_stderr_sink(self) -> Self {
        self.with_sink(ConsoleSink::stderr())
    }

    pub fn with_stdout_sink(self) -> Self {
        self.with_sink(ConsoleSink::stdout())
    }

    pub fn with_file_sink(self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.with_constructor(Box::new(move || {
            let sink = FileSink::new(&path)?;
            Ok(Box::new(sink))
        }))
    }

    pub fn with_sink(self, sink: impl LogSink + 'static) -> Self {
        self.with_constructor(Box::new(move || Ok(Box::new(sink))))
    }

    pub fn with_formatter(self, formatter: impl LogFormatter + 'static) -> Self {
        Self {
            formatter_builder: Box::new(move || Box::new(formatter)),
            ..self
        }
    }

    fn with_constructor(mut self, constructor: SinkConstructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Opens every sink now; a bad file path fails here rather than on first write.
    pub fn build(self) -> Result<Logger> {
        let sinks = self
            .constructors
            .into_iter()
            .map(|constructor| constructor())
            .collect::<Result<Vec<_>>>()?;

        Ok(Logger {
            threshold: self.threshold,
            sinks,
            formatter: (self.formatter_builder)(),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

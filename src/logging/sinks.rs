use std::{
    fs::File,
    io::{self, LineWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::error::{Error, Result};

use super::LogSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Moves the cursor to the start of the previous line and clears to the end
/// of the screen, so the next line replaces the one before it.
pub const OVERWRITE_PREVIOUS_LINE: &str = "\x1B[1F\x1B[0J";

pub struct ConsoleSink {
    target: ConsoleTarget,
    single_line: bool,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            single_line: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    /// Each line overwrites the previous one. Only takes effect when the
    /// target stream is a terminal.
    pub fn with_single_line(self, enabled: bool) -> Self {
        let is_tty = match self.target {
            ConsoleTarget::Stdout => yansi::Condition::stdout_is_tty(),
            ConsoleTarget::Stderr => yansi::Condition::stderr_is_tty(),
        };

        Self {
            single_line: enabled && is_tty,
            ..self
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.single_line
    }
}

fn write_console_line(writer: &mut impl Write, line: &str, single_line: bool) -> io::Result<()> {
    if single_line {
        write!(writer, "{}", OVERWRITE_PREVIOUS_LINE)?;
    }
    writeln!(writer, "{}", line)?;
    writer.flush()
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                write_console_line(&mut io::stdout().lock(), line, self.single_line)
            }
            ConsoleTarget::Stderr => {
                write_console_line(&mut io::stderr().lock(), line, self.single_line)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        }
    }
}

/// Appends lines to a file opened once at construction.
pub struct FileSink {
    file: LineWriter<File>,
    file_path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Configuration {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file: LineWriter::new(file),
            file_path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Keeps every line in memory. Clones share the same buffer, so a clone kept
/// by the caller observes what the logger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        lines.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

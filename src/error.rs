use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed opening or creating log file {}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed writing to {sink} sink")]
    Write {
        sink: String,
        #[source]
        source: io::Error,
    },

    #[error("Unknown severity '{0}', expected one of debug, info, warning, error")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Leveled line logging to the console and, optionally, a file.
//!
//! ```no_run
//! use linelog::{Config, Logger, Severity};
//!
//! let mut logger = Logger::new(&Config::default())?;
//! logger.log(Severity::Info, "Starting application", Some("main"))?;
//! logger.shutdown()?;
//! # Ok::<(), linelog::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::{Builder, LogBridge, Logger, Severity};

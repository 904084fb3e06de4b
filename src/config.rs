use std::path::PathBuf;

use crate::{
    error::Result,
    logging::{ConsoleTarget, Severity},
};

pub const DEFAULT_FILE_PATH: &str = "log.txt";
pub const LEVEL_ENV: &str = "LINELOG_LEVEL";
pub const FILE_ENV: &str = "LINELOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub threshold: Severity,
    pub log_to_file: bool,
    pub file_path: PathBuf,
    pub console: ConsoleTarget,
    /// Overwrite the previous console line instead of scrolling.
    pub single_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            log_to_file: false,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            console: ConsoleTarget::default(),
            single_line: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `LINELOG_LEVEL` and `LINELOG_FILE`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_ENV) {
            self.threshold = level.parse()?;
        }

        // An empty value counts as unset.
        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.is_empty()) {
            self.log_to_file = true;
            self.file_path = PathBuf::from(path);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::new();

        assert_eq!(config.threshold, Severity::Info);
        assert!(!config.log_to_file);
        assert_eq!(config.file_path, PathBuf::from("log.txt"));
        assert_eq!(config.console, ConsoleTarget::Stderr);
        assert!(!config.single_line);
    }

    #[test]
    fn overrides_threshold_and_file() {
        let config = Config::new()
            .with_overrides(lookup(&[
                ("LINELOG_LEVEL", "warning"),
                ("LINELOG_FILE", "/tmp/app.log"),
            ]))
            .unwrap();

        assert_eq!(config.threshold, Severity::Warning);
        assert!(config.log_to_file);
        assert_eq!(config.file_path, PathBuf::from("/tmp/app.log"));
    }

    #[test]
    fn empty_file_override_is_ignored() {
        let config = Config::new()
            .with_overrides(lookup(&[("LINELOG_FILE", "")]))
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_level_override_is_rejected() {
        let result = Config::new().with_overrides(lookup(&[("LINELOG_LEVEL", "verbose")]));

        assert!(matches!(result, Err(Error::UnknownSeverity(_))));
    }
}

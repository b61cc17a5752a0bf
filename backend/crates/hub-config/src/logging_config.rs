use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// ANSI level colors on stdout; ignored for file output
    pub colored: bool,
    /// File name inside `dir`; stdout when unset
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: DEFAULT_LOG_DIRECTORY.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Where file output goes, resolved against `base`. `None` means stdout.
    pub fn file_path(&self, base: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|name| base.join(&self.dir).join(name))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.file {
            Some(name) if name.trim().is_empty() => Err(ConfigError::invalid(
                "logging.file",
                "must not be blank when set",
            )),
            _ => Ok(()),
        }
    }
}

use std::fmt::Display;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting holds a value the server cannot run with
    #[error("Invalid setting `{key}`: {message} {location}")]
    InvalidSetting {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed TOML in {path}: {source} {location}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },

    #[error("Cannot resolve the config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<M: Into<String>>(key: &'static str, message: M) -> Self {
        ConfigError::InvalidSetting {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn parse(path: &Path, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The offending setting, for `InvalidSetting` errors.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Reject `value` unless `min <= value <= max`.
#[track_caller]
pub(crate) fn check_range<T: PartialOrd + Display>(
    key: &'static str,
    value: T,
    min: T,
    max: T,
) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::invalid(
            key,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use sqlx::migrate::MigrateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Query failed: {source} {location}")]
    Sqlx {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Schema migration failed: {source} {location}")]
    Migration {
        #[source]
        source: MigrateError,
        location: ErrorLocation,
    },

    #[error("Cannot create database directory {path}: {source} {location}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// A stored value does not decode into its model type
    #[error("Corrupt row in {table}.{column}: {message} {location}")]
    Decode {
        table: &'static str,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot encode {column}: {source} {location}")]
    Encode {
        column: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn decode(
        table: &'static str,
        column: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Decode {
            table,
            column,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn encode(column: &'static str, source: serde_json::Error) -> Self {
        Self::Encode {
            column,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MigrateError> for DbError {
    #[track_caller]
    fn from(source: MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

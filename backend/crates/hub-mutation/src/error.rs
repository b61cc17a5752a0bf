use hub_core::{CoreError, EntityType};
use hub_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl MutationError {
    #[track_caller]
    pub fn validation<M: Into<String>>(field: &str, message: M) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity_type: EntityType, id: Uuid) -> Self {
        Self::NotFound {
            message: format!("{} {} not found", entity_type, id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<M: Into<String>>(message: M) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Internal { .. } | Self::Database { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<DbError> for MutationError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for MutationError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for MutationError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let field = error.field_name().map(str::to_string);
        let message = match error {
            CoreError::Validation { message, .. } => message,
            CoreError::UnknownValue { field, value, .. } => format!("Unknown {field}: {value}"),
        };

        Self::Validation {
            message,
            field,
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, MutationError>;

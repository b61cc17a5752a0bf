use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// A string that names none of the variants of a closed set
    /// (priority, role, entity type, activity action).
    #[error("Unknown {field} '{value}' {location}")]
    UnknownValue {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Validation failure attributed to a single input field
    #[track_caller]
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Input field the error is attributed to, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::UnknownValue { field, .. } => Some(*field),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

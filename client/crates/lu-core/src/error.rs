use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification kind: {value} {location}")]
    InvalidNotificationKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid media kind: {value} {location}")]
    InvalidMediaKind {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the offending field, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by an identity provider exchange.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Credentials rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
    },

    #[error("{field} already taken: {message} {location}")]
    Conflict {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Policy violation: {message} {location}")]
    Policy {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(field: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn policy(message: impl Into<String>) -> Self {
        Self::Policy {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A network-level failure; retrying may succeed.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

use crate::{ProviderError, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use lu_core::CoreError;
use thiserror::Error;

/// Errors surfaced by session operations.
///
/// All of them are recoverable at the call site; none leave the session in
/// a partially updated state.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {source} {location}")]
    Authentication {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Registration failed: {source} {location}")]
    Registration {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Another sign-in or sign-up is already in progress {location}")]
    OperationInFlight { location: ErrorLocation },

    /// A sign-out landed while the provider call was pending.
    #[error("Sign-in cancelled by a sign-out {location}")]
    Superseded { location: ErrorLocation },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    /// Only ever logged: restore treats a corrupt record as absent.
    #[error("Stored identity is corrupt: {message} {location}")]
    PersistedStateCorrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("No route for path '{path}' {location}")]
    UnknownRoute {
        path: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication(source: ProviderError) -> Self {
        Self::Authentication {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registration(source: ProviderError) -> Self {
        Self::Registration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn operation_in_flight() -> Self {
        Self::OperationInFlight {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn superseded() -> Self {
        Self::Superseded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persisted_state_corrupt(message: impl Into<String>) -> Self {
        Self::PersistedStateCorrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether submitting the same input again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Authentication { source, .. } | Self::Registration { source, .. } => {
                source.is_unreachable()
            }
            Self::OperationInFlight { .. } | Self::Superseded { .. } => true,
            Self::Storage { source, .. } => source.is_transient(),
            _ => false,
        }
    }

    /// Message for the form that submitted the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Authentication { source, .. } if source.is_unreachable() => {
                "Login failed. We couldn't reach the server, please try again.".to_string()
            }
            Self::Authentication { .. } => {
                "Login failed. Please check your credentials and try again.".to_string()
            }
            Self::Registration {
                source:
                    ProviderError::Conflict { message, .. } | ProviderError::Policy { message, .. },
                ..
            } => format!("Signup failed. {message}."),
            Self::Registration { .. } => {
                "Signup failed. Please try again with different credentials.".to_string()
            }
            Self::OperationInFlight { .. } => "Please wait, still working on it.".to_string(),
            Self::Superseded { .. } => "Sign-in was cancelled because you signed out.".to_string(),
            Self::Storage { .. } | Self::Serialization { .. } => {
                "Couldn't save your session on this device. Check disk space and permissions."
                    .to_string()
            }
            Self::PersistedStateCorrupt { .. } => {
                "Your saved session couldn't be read. Please sign in again.".to_string()
            }
            Self::UnknownRoute { path, .. } => format!("Page not found: {path}"),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { field, message, .. } => Self::validation(field, message),
            other => Self::validation("input", other.to_string()),
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

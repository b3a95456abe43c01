use lu_config::ConfigError;
use lu_core::CoreError;
use lu_session::{SessionError, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the `linkup` binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{what} not found {location}")]
    NotFound {
        what: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line for stderr. Session errors use their form message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session { source, .. } => source.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for CliError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

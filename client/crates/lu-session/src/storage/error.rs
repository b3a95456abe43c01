use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from durable client storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Failed to create storage directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove {path}: {source} {location}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Write { .. } | Self::AtomicRename { .. } | Self::Remove { .. }
        )
    }

    /// Creates InvalidKey error at caller location.
    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Read error at caller location.
    #[track_caller]
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Remove error at caller location.
    #[track_caller]
    pub fn remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::Remove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

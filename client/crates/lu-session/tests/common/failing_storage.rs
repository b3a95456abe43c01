#![allow(dead_code)]

use std::io;

use lu_session::{ClientStorage, MemoryStorage, StorageError, StorageResult};

/// Memory storage with selected operations forced to fail.
#[derive(Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: bool,
    fail_removes: bool,
}

impl FailingStorage {
    /// Writes and removes fail; reads work.
    pub fn writes() -> Self {
        Self {
            fail_writes: true,
            fail_removes: true,
            ..Self::default()
        }
    }

    /// Only removes fail.
    pub fn removes() -> Self {
        Self {
            fail_removes: true,
            ..Self::default()
        }
    }

    pub fn everything() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            fail_removes: true,
            ..Self::default()
        }
    }

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "read-only device")
    }
}

impl ClientStorage for FailingStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::read(key.into(), Self::denied()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::write(key.into(), Self::denied()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_removes {
            return Err(StorageError::remove(key.into(), Self::denied()));
        }
        self.inner.remove(key)
    }
}

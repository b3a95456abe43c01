pub mod error;
mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::storage::error::{Result as StorageResult, StorageError};

/// Key holding the serialized signed-in identity.
pub const USER_KEY: &str = "user";
/// Key holding the appearance preference (`light` or `dark`).
pub const THEME_KEY: &str = "theme";

/// String-valued key/value store that survives process restarts.
///
/// Calls are synchronous: a successful `set` or `remove` is durable when it
/// returns.
pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys are used as file names, so keep them to a safe alphabet.
#[track_caller]
pub(crate) fn check_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}

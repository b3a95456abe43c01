use crate::DEFAULT_BACKUP_CORRUPTED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keep a copy of an unreadable stored identity before discarding it.
    pub backup_corrupted: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backup_corrupted: DEFAULT_BACKUP_CORRUPTED,
        }
    }
}

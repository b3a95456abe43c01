//! User id as found in stored records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of a user account.
///
/// Records written by earlier clients carry a plain integer (`1` for the
/// demo account, a millisecond timestamp for sign-ups). Accounts created
/// here get a v4 uuid. Both round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(u64),
    Uuid(Uuid),
}

impl UserId {
    /// Fresh random id for a new account.
    pub fn generate() -> Self {
        Self::Uuid(Uuid::new_v4())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self::Uuid(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Uuid(id) => write!(f, "{id}"),
        }
    }
}

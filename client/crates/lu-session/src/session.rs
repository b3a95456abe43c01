use lu_core::Identity;

use serde::Serialize;

/// Whether the stored identity has been looked at yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Restore has not finished; the identity is unknown.
    Loading,
    Ready,
}

/// Snapshot of the process-wide session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub identity: Option<Identity>,
    pub status: SessionStatus,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            identity: None,
            status: SessionStatus::Loading,
        }
    }

    pub fn ready(identity: Option<Identity>) -> Self {
        Self {
            identity,
            status: SessionStatus::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }

    /// Ready and holding an identity.
    pub fn is_signed_in(&self) -> bool {
        self.is_ready() && self.identity.is_some()
    }

    /// The identity, or None while still loading.
    pub fn trusted_identity(&self) -> Option<&Identity> {
        if self.is_ready() {
            self.identity.as_ref()
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

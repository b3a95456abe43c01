use crate::{Identity, NotificationKind, Tweet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub user: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet: Option<Tweet>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// One-line summary, e.g. "Tech Developer liked your tweet".
    pub fn summary(&self) -> String {
        format!("{} {}", self.user.display_name, self.kind.describe())
    }
}

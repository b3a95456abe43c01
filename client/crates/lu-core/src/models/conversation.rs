use crate::{DirectMessage, Identity, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "conversation_id")]
    pub id: u64,
    pub participants: Vec<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<DirectMessage>,
    pub created_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
}

impl Conversation {
    /// Participants other than `viewer`, for the conversation list title.
    pub fn others(&self, viewer: UserId) -> impl Iterator<Item = &Identity> {
        self.participants.iter().filter(move |p| p.id != viewer)
    }
}

use crate::{Identity, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    #[serde(rename = "message_id")]
    pub id: u64,
    pub conversation_id: u64,
    #[serde(rename = "sender_user_id")]
    pub sender_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Identity>,
}

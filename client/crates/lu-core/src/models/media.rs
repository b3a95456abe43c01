use crate::MediaKind;

use serde::{Deserialize, Serialize};

/// Attachment on a tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "media_id")]
    pub id: u64,
    pub tweet_id: u64,
    #[serde(rename = "media_url")]
    pub url: String,
    #[serde(rename = "media_type")]
    pub kind: MediaKind,
}

//! Tweet entity as delivered by the (mock) data source.

use crate::{Identity, Media, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(rename = "tweet_id")]
    pub id: u64,
    #[serde(rename = "author_user_id")]
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Set when this tweet is a reply.
    #[serde(rename = "parent_tweet_id", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Identity>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub retweets_count: u32,
    #[serde(default)]
    pub replies_count: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_retweeted: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
}

impl Tweet {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// First attachment, the only one the card shows.
    pub fn preview_media(&self) -> Option<&Media> {
        self.media.first()
    }
}

//! Identity - the authenticated user's profile record.

use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Profile of the signed-in user.
///
/// Treated as an immutable value: a new sign-in replaces it wholesale.
/// Field names on the wire match the stored `"user"` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "user_id")]
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "is_verified", default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u32>,
}

impl Identity {
    /// Create an unverified identity with a fresh id and a generated avatar.
    pub fn new(username: String, email: String, display_name: String) -> Self {
        let avatar_url = Some(default_avatar_url(&username));
        Self {
            id: UserId::generate(),
            username,
            email,
            display_name,
            bio: None,
            verified: false,
            created_at: Utc::now(),
            avatar_url,
            follower_count: None,
            following_count: None,
        }
    }

    /// Router path of this user's profile page.
    pub fn profile_path(&self) -> String {
        format!("/profile/{}", self.username)
    }

    /// First character of the display name, used when no avatar loads.
    pub fn initial(&self) -> Option<char> {
        self.display_name.chars().next()
    }
}

/// Generated avatar URL for a seed (usually the username).
pub fn default_avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={seed}")
}

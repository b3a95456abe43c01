use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What another user did to trigger a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Retweet,
    Follow,
    Reply,
    Mention,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Retweet => "retweet",
            Self::Follow => "follow",
            Self::Reply => "reply",
            Self::Mention => "mention",
        }
    }

    /// Verb phrase shown after the actor's name.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Like => "liked your tweet",
            Self::Retweet => "retweeted your tweet",
            Self::Follow => "followed you",
            Self::Reply => "replied to your tweet",
            Self::Mention => "mentioned you",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "like" => Ok(Self::Like),
            "retweet" => Ok(Self::Retweet),
            "follow" => Ok(Self::Follow),
            "reply" => Ok(Self::Reply),
            "mention" => Ok(Self::Mention),
            _ => Err(CoreError::InvalidNotificationKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

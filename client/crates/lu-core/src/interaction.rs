//! Like / retweet / bookmark / follow toggles.
//!
//! These are client-side projections only. Nothing here is persisted or
//! reconciled with a backend: the state starts from the record the data
//! source returned and is discarded with the view that owns it.

use crate::Tweet;

use serde::Serialize;

/// Interaction state of one tweet card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetInteractions {
    pub tweet_id: u64,
    pub liked: bool,
    pub retweeted: bool,
    pub bookmarked: bool,
    pub likes_count: u32,
    pub retweets_count: u32,
}

impl TweetInteractions {
    /// Flip the like flag and adjust the counter. Returns the new flag.
    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.likes_count = step(self.likes_count, self.liked);
        self.liked
    }

    /// Flip the retweet flag and adjust the counter. Returns the new flag.
    pub fn toggle_retweet(&mut self) -> bool {
        self.retweeted = !self.retweeted;
        self.retweets_count = step(self.retweets_count, self.retweeted);
        self.retweeted
    }

    /// Bookmarks have no visible counter.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }
}

impl From<&Tweet> for TweetInteractions {
    fn from(tweet: &Tweet) -> Self {
        Self {
            tweet_id: tweet.id,
            liked: tweet.is_liked,
            retweeted: tweet.is_retweeted,
            bookmarked: tweet.is_bookmarked,
            likes_count: tweet.likes_count,
            retweets_count: tweet.retweets_count,
        }
    }
}

/// Follow button on a profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FollowToggle {
    pub following: bool,
}

impl FollowToggle {
    pub fn toggle(&mut self) -> bool {
        self.following = !self.following;
        self.following
    }

    pub fn label(&self) -> &'static str {
        if self.following { "Following" } else { "Follow" }
    }
}

fn step(count: u32, increment: bool) -> u32 {
    if increment {
        count.saturating_add(1)
    } else {
        count.saturating_sub(1)
    }
}

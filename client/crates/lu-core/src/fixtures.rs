//! Typed builders for canned records.
//!
//! Used by the mock data source and the mock identity provider, and by tests
//! that need a realistic record without spelling out every field.

use crate::{Identity, Media, MediaKind, Tweet, UserId, default_avatar_url};

use chrono::{DateTime, Utc};

/// Builder for [`Identity`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct IdentityBuilder {
    identity: Identity,
}

impl IdentityBuilder {
    /// Start from `username`, deriving email, display name and avatar from it.
    pub fn new(username: &str) -> Self {
        Self {
            identity: Identity {
                id: UserId::generate(),
                username: username.to_string(),
                email: format!("{username}@example.com"),
                display_name: username.to_string(),
                bio: None,
                verified: false,
                created_at: Utc::now(),
                avatar_url: Some(default_avatar_url(username)),
                follower_count: None,
                following_count: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<UserId>) -> Self {
        self.identity.id = id.into();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.identity.email = email.to_string();
        self
    }

    pub fn display_name(mut self, display_name: &str) -> Self {
        self.identity.display_name = display_name.to_string();
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.identity.bio = Some(bio.to_string());
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.identity.verified = verified;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.identity.created_at = created_at;
        self
    }

    pub fn avatar_seed(mut self, seed: &str) -> Self {
        self.identity.avatar_url = Some(default_avatar_url(seed));
        self
    }

    pub fn without_avatar(mut self) -> Self {
        self.identity.avatar_url = None;
        self
    }

    pub fn counts(mut self, followers: u32, following: u32) -> Self {
        self.identity.follower_count = Some(followers);
        self.identity.following_count = Some(following);
        self
    }

    pub fn build(self) -> Identity {
        self.identity
    }
}

/// Builder for [`Tweet`].
#[derive(Debug, Clone)]
pub struct TweetBuilder {
    tweet: Tweet,
}

impl TweetBuilder {
    pub fn new(id: u64, author: &Identity, content: &str) -> Self {
        Self {
            tweet: Tweet {
                id,
                author_id: author.id,
                content: content.to_string(),
                created_at: Utc::now(),
                parent_id: None,
                author: Some(author.clone()),
                likes_count: 0,
                retweets_count: 0,
                replies_count: 0,
                is_liked: false,
                is_retweeted: false,
                is_bookmarked: false,
                media: Vec::new(),
            },
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.tweet.created_at = created_at;
        self
    }

    pub fn reply_to(mut self, parent_id: u64) -> Self {
        self.tweet.parent_id = Some(parent_id);
        self
    }

    /// Drop the embedded author, as profile timelines do.
    pub fn without_author(mut self) -> Self {
        self.tweet.author = None;
        self
    }

    pub fn counts(mut self, likes: u32, retweets: u32, replies: u32) -> Self {
        self.tweet.likes_count = likes;
        self.tweet.retweets_count = retweets;
        self.tweet.replies_count = replies;
        self
    }

    pub fn liked(mut self) -> Self {
        self.tweet.is_liked = true;
        self
    }

    pub fn retweeted(mut self) -> Self {
        self.tweet.is_retweeted = true;
        self
    }

    pub fn bookmarked(mut self) -> Self {
        self.tweet.is_bookmarked = true;
        self
    }

    pub fn media(mut self, media_id: u64, url: &str, kind: MediaKind) -> Self {
        self.tweet.media.push(Media {
            id: media_id,
            tweet_id: self.tweet.id,
            url: url.to_string(),
            kind,
        });
        self
    }

    pub fn build(self) -> Tweet {
        self.tweet
    }
}

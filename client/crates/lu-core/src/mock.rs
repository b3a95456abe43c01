//! Canned data standing in for the remote API.
//!
//! Every view that would fetch from a server reads from here instead. All
//! timestamps are relative to the `now` the source was created with, so a
//! source pinned with [`MockDataSource::at`] is fully deterministic.

use crate::{
    Conversation, DirectMessage, Identity, IdentityBuilder, Notification, NotificationKind, Trend,
    Tweet, TweetBuilder, UserId,
};

use chrono::{DateTime, Duration, TimeZone, Utc};

pub const DEMO_USER_ID: UserId = UserId::Numeric(1);
pub const DEMO_USERNAME: &str = "demo_user";
const TECHDEV_ID: UserId = UserId::Numeric(2);
const CODEMASTER_ID: UserId = UserId::Numeric(3);
const DESIGNPRO_ID: UserId = UserId::Numeric(4);

const TRENDING: [(&str, &str); 5] = [
    ("#ReactJS", "125K"),
    ("#TypeScript", "89K"),
    ("#WebDevelopment", "67K"),
    ("#AI", "234K"),
    ("#Python", "156K"),
];

#[derive(Debug, Clone)]
pub struct MockDataSource {
    now: DateTime<Utc>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Source whose relative timestamps are anchored at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    fn ago(&self, minutes: i64) -> DateTime<Utc> {
        self.now - Duration::minutes(minutes)
    }

    fn techdev(&self) -> Identity {
        IdentityBuilder::new("techdev")
            .id(TECHDEV_ID)
            .email("tech@example.com")
            .display_name("Tech Developer")
            .bio("Full-stack developer")
            .verified(true)
            .avatar_seed("tech")
            .created_at(self.now)
            .build()
    }

    fn codemaster(&self) -> Identity {
        IdentityBuilder::new("codemaster")
            .id(CODEMASTER_ID)
            .email("code@example.com")
            .display_name("Code Master")
            .bio("Software Engineer | Open Source Contributor")
            .avatar_seed("code")
            .created_at(self.now)
            .build()
    }

    fn designpro(&self) -> Identity {
        IdentityBuilder::new("designpro")
            .id(DESIGNPRO_ID)
            .email("design@example.com")
            .display_name("Design Pro")
            .bio("UI/UX Designer & Frontend Developer")
            .verified(true)
            .avatar_seed("design")
            .created_at(self.now)
            .build()
    }

    /// Home timeline, newest first.
    pub fn home_feed(&self) -> Vec<Tweet> {
        vec![
            TweetBuilder::new(
                1,
                &self.techdev(),
                "Just launched my new project! 🚀 Built with React, TypeScript, and Flask. Check it out!",
            )
            .created_at(self.ago(30))
            .counts(42, 8, 5)
            .build(),
            TweetBuilder::new(
                2,
                &self.codemaster(),
                "Amazing tutorial on TypeScript generics! 💯\n\nLearning so much today. #TypeScript #WebDev",
            )
            .created_at(self.ago(2 * 60))
            .counts(156, 23, 12)
            .liked()
            .bookmarked()
            .build(),
            TweetBuilder::new(
                3,
                &self.designpro(),
                "Hot take: Tailwind CSS is the best thing that happened to frontend development in the last 5 years. Fight me! 😤",
            )
            .created_at(self.ago(5 * 60))
            .counts(89, 15, 47)
            .build(),
        ]
    }

    pub fn trending(&self) -> Vec<Trend> {
        TRENDING
            .iter()
            .zip(1..)
            .map(|((topic, tweets), rank)| Trend {
                rank,
                topic: topic.to_string(),
                tweets: tweets.to_string(),
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        vec![
            Notification {
                id: 1,
                kind: NotificationKind::Like,
                user: self.techdev(),
                tweet: None,
                created_at: self.ago(15),
                read: false,
            },
            Notification {
                id: 2,
                kind: NotificationKind::Follow,
                user: self.designpro(),
                tweet: None,
                created_at: self.ago(2 * 60),
                read: false,
            },
            Notification {
                id: 3,
                kind: NotificationKind::Retweet,
                user: self.codemaster(),
                tweet: None,
                created_at: self.ago(5 * 60),
                read: true,
            },
        ]
    }

    /// Conversations `viewer` takes part in.
    pub fn conversations(&self, viewer: &Identity) -> Vec<Conversation> {
        let messages = self.messages(1, viewer);
        vec![Conversation {
            id: 1,
            participants: vec![viewer.clone(), self.techdev()],
            last_message: messages.into_iter().next(),
            created_at: self.now,
            last_message_at: self.ago(30),
        }]
    }

    /// Thread of `conversation_id`, oldest first.
    pub fn messages(&self, conversation_id: u64, viewer: &Identity) -> Vec<DirectMessage> {
        let techdev = self.techdev();
        vec![
            DirectMessage {
                id: 1,
                conversation_id,
                sender_id: techdev.id,
                content: "Hey! How are you?".to_string(),
                sent_at: self.ago(30),
                sender: Some(techdev),
            },
            DirectMessage {
                id: 2,
                conversation_id,
                sender_id: viewer.id,
                content: "I'm good! Thanks for asking 😊".to_string(),
                sent_at: self.ago(25),
                sender: Some(viewer.clone()),
            },
        ]
    }

    /// Profile page record for `username`.
    pub fn profile(&self, username: &str) -> Identity {
        let username = if username.is_empty() {
            DEMO_USERNAME
        } else {
            username
        };

        let joined = Utc
            .with_ymd_and_hms(2023, 1, 15, 0, 0, 0)
            .single()
            .unwrap_or(self.now);

        IdentityBuilder::new(username)
            .id(DEMO_USER_ID)
            .email("demo@example.com")
            .display_name("Demo User")
            .bio("🚀 Full-stack developer | 💻 React & TypeScript enthusiast | 🎨 Design lover")
            .verified(true)
            .avatar_seed(username)
            .created_at(joined)
            .counts(1234, 567)
            .build()
    }

    /// Tweets shown on `profile`'s page.
    pub fn profile_tweets(&self, profile: &Identity) -> Vec<Tweet> {
        vec![
            TweetBuilder::new(
                1,
                profile,
                "Just pushed a major update to my project! Check it out 🎉",
            )
            .created_at(self.ago(3 * 60))
            .counts(45, 12, 8)
            .without_author()
            .build(),
        ]
    }
}

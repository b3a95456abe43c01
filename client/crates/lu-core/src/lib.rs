pub mod compose;
pub mod error;
pub mod fixtures;
pub mod interaction;
pub mod mock;
pub mod models;
pub mod validation;

pub use compose::Draft;
pub use error::{CoreError, Result as CoreResult};
pub use fixtures::{IdentityBuilder, TweetBuilder};
pub use interaction::{FollowToggle, TweetInteractions};
pub use mock::{DEMO_USER_ID, DEMO_USERNAME, MockDataSource};
pub use models::conversation::Conversation;
pub use models::credentials::Credentials;
pub use models::direct_message::DirectMessage;
pub use models::identity::{Identity, default_avatar_url};
pub use models::media::Media;
pub use models::media_kind::MediaKind;
pub use models::notification::Notification;
pub use models::notification_kind::NotificationKind;
pub use models::registration::Registration;
pub use models::theme::Theme;
pub use models::trend::Trend;
pub use models::tweet::Tweet;
pub use models::user_id::UserId;
pub use validation::FieldLimits;

/// Maximum characters in a single tweet.
pub const DEFAULT_MAX_TWEET_LENGTH: usize = 280;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 15;
pub const DEFAULT_MAX_DISPLAY_NAME_LENGTH: usize = 50;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

#[cfg(test)]
mod tests;

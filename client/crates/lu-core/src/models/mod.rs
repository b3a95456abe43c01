pub mod conversation;
pub mod credentials;
pub mod direct_message;
pub mod identity;
pub mod media;
pub mod media_kind;
pub mod notification;
pub mod notification_kind;
pub mod registration;
pub mod theme;
pub mod trend;
pub mod tweet;
pub mod user_id;

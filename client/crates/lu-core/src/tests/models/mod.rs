mod identity;
mod notification_kind;
mod registration;
mod theme;
mod user_id;

use crate::{MediaKind, NotificationKind};

use std::str::FromStr;

#[test]
fn test_notification_kind_from_str() {
    for kind in [
        NotificationKind::Like,
        NotificationKind::Retweet,
        NotificationKind::Follow,
        NotificationKind::Reply,
        NotificationKind::Mention,
    ] {
        assert_eq!(NotificationKind::from_str(kind.as_str()).unwrap(), kind);
    }
    assert!(NotificationKind::from_str("poke").is_err());
}

#[test]
fn test_notification_kind_serializes_as_snake_case() {
    let json = serde_json::to_string(&NotificationKind::Follow).unwrap();
    assert_eq!(json, "\"follow\"");
}

#[test]
fn test_media_kind_from_str() {
    assert_eq!(MediaKind::from_str("gif").unwrap(), MediaKind::Gif);
    assert!(MediaKind::from_str("audio").is_err());
}

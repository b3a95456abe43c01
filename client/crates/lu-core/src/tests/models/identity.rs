use crate::{DEMO_USER_ID, Identity, IdentityBuilder, UserId};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

const STORED_RECORD: &str = r#"{
    "user_id": "00000000-0000-0000-0000-000000000001",
    "username": "demo_user",
    "email": "a@b.com",
    "display_name": "Demo User",
    "bio": "This is a demo account",
    "is_verified": true,
    "created_at": "2024-01-01T00:00:00Z",
    "avatar_url": "https://api.dicebear.com/7.x/avataaars/svg?seed=demo"
}"#;

#[test]
fn given_stored_record_when_deserialize_then_maps_wire_names() {
    // When
    let identity: Identity = serde_json::from_str(STORED_RECORD).unwrap();

    // Then
    assert_that!(identity.username.as_str(), eq("demo_user"));
    assert_that!(identity.email.as_str(), eq("a@b.com"));
    assert_that!(identity.display_name.as_str(), eq("Demo User"));
    assert_that!(identity.verified, eq(true));
    assert_that!(identity.follower_count, none());
}

#[test]
fn given_record_with_integer_id_when_deserialize_then_numeric_id_kept() {
    // Given: a record as written by the web client's login
    let json = r#"{"user_id":1,"username":"demo_user","email":"a@b.com","display_name":"Demo User","bio":"This is a demo account","is_verified":true,"created_at":"2026-01-15T09:30:00.000Z","avatar_url":"https://api.dicebear.com/7.x/avataaars/svg?seed=demo"}"#;

    // When
    let identity: Identity = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(identity.id, eq(DEMO_USER_ID));
    assert_that!(identity.username.as_str(), eq("demo_user"));

    let written = serde_json::to_string(&identity).unwrap();
    assert!(written.contains("\"user_id\":1,"));
}

#[test]
fn given_sign_up_record_with_timestamp_id_when_deserialize_then_ok() {
    let json = r#"{"user_id":1760832000000,"username":"jo","email":"jo@x.com","display_name":"Jo","is_verified":false,"created_at":"2026-10-19T00:00:00.000Z"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.id, eq(UserId::Numeric(1_760_832_000_000)));
}

#[test]
fn given_missing_optional_fields_when_deserialize_then_defaults_to_none() {
    // Given
    let json = r#"{"user_id":"550e8400-e29b-41d4-a716-446655440000","username":"jo","email":"jo@x.com","display_name":"Jo","created_at":"2024-01-01T00:00:00Z"}"#;

    // When
    let identity: Identity = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(identity.bio, none());
    assert_that!(identity.avatar_url, none());
    assert_that!(identity.verified, eq(false));
}

#[test]
fn given_missing_username_when_deserialize_then_error() {
    let json = r#"{"user_id":"550e8400-e29b-41d4-a716-446655440000","email":"jo@x.com"}"#;

    assert_that!(serde_json::from_str::<Identity>(json), err(anything()));
}

#[test]
fn given_identity_when_serialize_then_uses_stored_field_names() {
    // Given
    let identity = IdentityBuilder::new("alice").verified(true).build();

    // When
    let json = serde_json::to_string(&identity).unwrap();

    // Then
    assert!(json.contains("\"user_id\""));
    assert!(json.contains("\"is_verified\":true"));
    assert!(!json.contains("\"bio\""));
    assert_that!(serde_json::from_str::<Identity>(&json), ok(eq(&identity)));
}

#[test]
fn given_new_identity_then_unverified_with_generated_avatar() {
    let identity = Identity::new("jo".into(), "jo@x.com".into(), "Jo".into());

    assert_that!(identity.verified, eq(false));
    assert_that!(
        identity.avatar_url.as_deref(),
        some(eq("https://api.dicebear.com/7.x/avataaars/svg?seed=jo"))
    );
    assert_that!(identity.profile_path().as_str(), eq("/profile/jo"));
    assert_that!(identity.initial(), some(eq('J')));
}

#[test]
fn given_two_new_identities_then_ids_differ() {
    let a = Identity::new("a".into(), "a@x.com".into(), "A".into());
    let b = Identity::new("a".into(), "a@x.com".into(), "A".into());

    assert_ne!(a.id, b.id);
}

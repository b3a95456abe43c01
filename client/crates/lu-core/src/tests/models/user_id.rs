use crate::UserId;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use uuid::Uuid;

#[test]
fn given_integer_when_deserialize_then_numeric() {
    assert_that!(serde_json::from_str::<UserId>("1"), ok(eq(&UserId::Numeric(1))));
}

#[test]
fn given_millisecond_timestamp_when_deserialize_then_numeric() {
    let id = serde_json::from_str::<UserId>("1760832000000").unwrap();

    assert_that!(id, eq(UserId::Numeric(1_760_832_000_000)));
}

#[test]
fn given_uuid_string_when_deserialize_then_uuid() {
    let id = serde_json::from_str::<UserId>(r#""550e8400-e29b-41d4-a716-446655440000""#).unwrap();

    assert!(matches!(id, UserId::Uuid(_)));
    assert_that!(id.to_string().as_str(), eq("550e8400-e29b-41d4-a716-446655440000"));
}

#[test]
fn given_garbage_when_deserialize_then_error() {
    assert_that!(serde_json::from_str::<UserId>(r#""abc""#), err(anything()));
    assert_that!(serde_json::from_str::<UserId>("-4"), err(anything()));
    assert_that!(serde_json::from_str::<UserId>("1.5"), err(anything()));
}

#[test]
fn given_numeric_id_when_serialize_then_bare_integer() {
    assert_that!(serde_json::to_string(&UserId::from(7)).unwrap().as_str(), eq("7"));
}

#[test]
fn given_generated_ids_then_uuid_and_distinct() {
    let a = UserId::generate();
    let b = UserId::generate();

    assert!(matches!(a, UserId::Uuid(_)));
    assert_ne!(a, b);
    assert_that!(UserId::from(Uuid::nil()), eq(UserId::Uuid(Uuid::nil())));
}

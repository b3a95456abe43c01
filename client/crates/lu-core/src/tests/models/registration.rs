use crate::{Credentials, FieldLimits, Registration};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

fn registration() -> Registration {
    Registration {
        username: "jo".into(),
        email: "jo@x.com".into(),
        password: "123456".into(),
        display_name: "Jo".into(),
    }
}

#[test]
fn given_valid_registration_when_validate_then_ok() {
    assert_that!(
        registration().validate(&FieldLimits::default()),
        ok(anything())
    );
}

#[test]
fn given_five_char_password_when_validate_then_password_error() {
    // Given
    let mut input = registration();
    input.password = "12345".into();

    // When
    let result = input.validate(&FieldLimits::default());

    // Then
    assert_that!(result.unwrap_err().field(), some(eq("password")));
}

#[test]
fn given_sixteen_char_username_when_validate_then_username_error() {
    let mut input = registration();
    input.username = "a".repeat(16);

    let result = input.validate(&FieldLimits::default());

    assert_that!(result.unwrap_err().field(), some(eq("username")));
}

#[test]
fn given_fifteen_char_username_when_validate_then_ok() {
    let mut input = registration();
    input.username = "a".repeat(15);

    assert_that!(input.validate(&FieldLimits::default()), ok(anything()));
}

#[test]
fn given_empty_username_when_validate_then_error() {
    let mut input = registration();
    input.username = "   ".into();

    let result = input.validate(&FieldLimits::default());

    assert_that!(result.unwrap_err().field(), some(eq("username")));
}

#[test]
fn given_display_name_over_fifty_chars_when_validate_then_error() {
    let mut input = registration();
    input.display_name = "x".repeat(51);

    let result = input.validate(&FieldLimits::default());

    assert_that!(result.unwrap_err().field(), some(eq("display_name")));
}

#[test]
fn given_multibyte_display_name_at_limit_when_validate_then_ok() {
    let mut input = registration();
    input.display_name = "é".repeat(50);

    assert_that!(input.validate(&FieldLimits::default()), ok(anything()));
}

#[test]
fn given_bad_email_when_validate_then_email_error() {
    let mut input = registration();
    input.email = "jo.x.com".into();

    let result = input.validate(&FieldLimits::default());

    assert_that!(result.unwrap_err().field(), some(eq("email")));
}

#[test]
fn given_custom_limits_when_validate_then_limits_apply() {
    let limits = FieldLimits {
        min_password_length: 10,
        ..FieldLimits::default()
    };

    assert_that!(registration().validate(&limits), err(anything()));
}

#[test]
fn given_empty_email_when_validate_credentials_then_error() {
    let credentials = Credentials::new("", "secret");

    assert_that!(credentials.validate().unwrap_err().field(), some(eq("email")));
}

#[test]
fn given_empty_password_when_validate_credentials_then_error() {
    let credentials = Credentials::new("a@b.com", "");

    assert_that!(
        credentials.validate().unwrap_err().field(),
        some(eq("password"))
    );
}

#[test]
fn given_credentials_when_debug_then_password_redacted() {
    let credentials = Credentials::new("a@b.com", "hunter2");

    let debug = format!("{credentials:?}");

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("a@b.com"));
}

use crate::{App, CliError, Interaction};

use lu_core::{MockDataSource, Registration};
use lu_session::{MemoryStorage, MockIdentityProvider, Route, SessionSettings};

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use serde_json::json;

fn create_test_app() -> App {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let app = App::new(
        Arc::new(MemoryStorage::new()),
        Arc::new(MockIdentityProvider::new()),
        SessionSettings::default(),
    )
    .with_data(MockDataSource::at(now));
    app.start();
    app
}

async fn signed_in_app() -> App {
    let app = create_test_app();
    app.login("a@b.com", "secret").await.unwrap();
    app
}

// =========================================================================
// Session commands
// =========================================================================

#[tokio::test]
async fn given_fresh_app_when_status_then_ready_and_signed_out() {
    let app = create_test_app();

    let status = app.status().unwrap();

    assert_that!(status, eq(&json!({ "identity": null, "status": "ready" })));
}

#[tokio::test]
async fn given_login_when_status_then_identity_present() {
    // Given
    let app = signed_in_app().await;

    // When
    let status = app.status().unwrap();

    // Then
    assert_that!(status["identity"]["username"], eq(&json!("demo_user")));
    assert_that!(status["identity"]["email"], eq(&json!("a@b.com")));
}

#[tokio::test]
async fn given_short_password_when_signup_then_session_error() {
    let app = create_test_app();
    let registration = Registration {
        username: "jo".to_string(),
        email: "jo@x.com".to_string(),
        password: "12345".to_string(),
        display_name: "Jo".to_string(),
    };

    let err = app.signup(&registration).await.unwrap_err();

    assert!(matches!(err, CliError::Session { .. }), "{err:?}");
    assert_that!(err.user_message(), contains_substring("password"));
}

#[tokio::test]
async fn given_signed_in_when_logout_then_signed_out() {
    let app = signed_in_app().await;

    let status = app.logout().unwrap();

    assert_that!(status["identity"], eq(&json!(null)));
}

// =========================================================================
// Navigation
// =========================================================================

#[tokio::test]
async fn given_signed_out_when_open_home_then_redirect_to_login() {
    let app = create_test_app();

    let result = app.open("/").unwrap();

    assert_that!(
        result,
        eq(&json!({ "decision": "redirect", "target": "/login" }))
    );
}

#[tokio::test]
async fn given_signed_out_when_open_login_then_render() {
    let app = create_test_app();

    let result = app.open("/login").unwrap();

    assert_that!(result["decision"], eq(&json!("render")));
    assert_that!(result["route"], eq(&json!("/login")));
}

#[tokio::test]
async fn given_signed_in_when_open_signup_then_redirect_home() {
    let app = signed_in_app().await;

    let result = app.open("/signup").unwrap();

    assert_that!(result, eq(&json!({ "decision": "redirect", "target": "/" })));
}

#[tokio::test]
async fn given_signed_in_when_feed_then_three_tweets() {
    let app = signed_in_app().await;

    let result = app.navigate(&Route::Home).unwrap();

    assert_that!(result["decision"], eq(&json!("render")));
    assert_that!(result["view"].as_array().map(Vec::len), some(eq(3)));
}

#[tokio::test]
async fn given_signed_in_when_notifications_then_summaries_included() {
    let app = signed_in_app().await;

    let result = app.navigate(&Route::Notifications).unwrap();

    assert_that!(
        result["view"][0]["summary"],
        eq(&json!("Tech Developer liked your tweet"))
    );
}

#[tokio::test]
async fn given_signed_in_when_messages_then_conversation_includes_viewer() {
    let app = signed_in_app().await;

    let result = app.navigate(&Route::Messages).unwrap();

    let participants = &result["view"][0]["participants"];
    assert_that!(participants[0]["username"], eq(&json!("demo_user")));
    assert_that!(participants[1]["username"], eq(&json!("techdev")));
}

#[tokio::test]
async fn given_signed_in_when_open_profile_then_profile_and_tweets() {
    let app = signed_in_app().await;

    let result = app.open("/profile/techdev").unwrap();

    assert_that!(result["view"]["profile"]["username"], eq(&json!("techdev")));
    assert_that!(result["view"]["follow"]["following"], eq(&json!(false)));
    assert_that!(result["view"]["tweets"].as_array().map(Vec::len), some(eq(1)));
}

#[tokio::test]
async fn given_signed_in_when_profile_without_username_then_own_profile() {
    let app = signed_in_app().await;

    let result = app.profile(None).unwrap();

    assert_that!(result["decision"], eq(&json!("render")));
    assert_that!(result["route"], eq(&json!("/profile/demo_user")));
    assert_that!(result["view"]["profile"]["username"], eq(&json!("demo_user")));
}

#[tokio::test]
async fn given_new_account_when_profile_without_username_then_new_username() {
    // Given
    let app = create_test_app();
    let registration = Registration {
        username: "jo".to_string(),
        email: "jo@x.com".to_string(),
        password: "secret1".to_string(),
        display_name: "Jo".to_string(),
    };
    app.signup(&registration).await.unwrap();

    // When
    let result = app.profile(None).unwrap();

    // Then
    assert_that!(result["route"], eq(&json!("/profile/jo")));
}

#[tokio::test]
async fn given_signed_out_when_profile_without_username_then_redirect_to_login() {
    let app = create_test_app();

    let result = app.profile(None).unwrap();

    assert_that!(
        result,
        eq(&json!({ "decision": "redirect", "target": "/login" }))
    );
}

#[tokio::test]
async fn given_unknown_path_when_open_then_error() {
    let app = signed_in_app().await;

    let err = app.open("/admin").unwrap_err();

    assert_that!(err.user_message(), contains_substring("/admin"));
}

// =========================================================================
// Compose and interactions
// =========================================================================

#[tokio::test]
async fn given_signed_in_when_compose_then_posted_with_remaining() {
    let app = signed_in_app().await;

    let result = app.compose("Hello, LinkUp!").unwrap();

    assert_that!(result["posted"], eq(&json!("Hello, LinkUp!")));
    assert_that!(result["remaining"], eq(&json!(266)));
}

#[tokio::test]
async fn given_over_long_text_when_compose_then_validation_error() {
    let app = signed_in_app().await;

    let err = app.compose(&"x".repeat(281)).unwrap_err();

    assert!(matches!(err, CliError::Core { .. }), "{err:?}");
}

#[tokio::test]
async fn given_signed_out_when_compose_then_redirect_without_posting() {
    let app = create_test_app();

    let result = app.compose("hi").unwrap();

    assert_that!(result["decision"], eq(&json!("redirect")));
}

#[tokio::test]
async fn given_liked_tweet_when_like_then_unliked_and_count_drops() {
    // Given: tweet 2 starts liked with 156 likes
    let app = signed_in_app().await;

    // When
    let result = app.interact(2, Interaction::Like).unwrap();

    // Then
    assert_that!(result["liked"], eq(&json!(false)));
    assert_that!(result["likes_count"], eq(&json!(155)));
}

#[tokio::test]
async fn given_missing_tweet_when_interact_then_not_found() {
    let app = signed_in_app().await;

    let err = app.interact(99, Interaction::Bookmark).unwrap_err();

    assert!(matches!(err, CliError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn given_signed_in_when_follow_then_following() {
    let app = signed_in_app().await;

    let result = app.follow("techdev").unwrap();

    assert_that!(result["following"], eq(&json!(true)));
    assert_that!(result["label"], eq(&json!("Following")));
}

// =========================================================================
// Theme
// =========================================================================

#[tokio::test]
async fn given_default_when_toggle_theme_then_dark() {
    let app = create_test_app();

    assert_that!(app.theme().unwrap(), eq(&json!({ "theme": "light" })));
    assert_that!(app.toggle_theme().unwrap(), eq(&json!({ "theme": "dark" })));
    assert_that!(app.theme().unwrap(), eq(&json!({ "theme": "dark" })));
}

#[tokio::test]
async fn given_unknown_theme_when_set_theme_then_error() {
    let app = create_test_app();

    let err = app.set_theme("purple").unwrap_err();

    assert!(matches!(err, CliError::Core { .. }), "{err:?}");
}

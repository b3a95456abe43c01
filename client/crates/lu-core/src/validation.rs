//! Field limits and syntactic checks shared by the forms.

use crate::{
    DEFAULT_MAX_DISPLAY_NAME_LENGTH, DEFAULT_MAX_TWEET_LENGTH, DEFAULT_MAX_USERNAME_LENGTH,
    DEFAULT_MIN_PASSWORD_LENGTH,
};

/// Length limits applied to user input. Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_username_length: usize,
    pub max_display_name_length: usize,
    pub min_password_length: usize,
    pub max_tweet_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_tweet_length: DEFAULT_MAX_TWEET_LENGTH,
        }
    }
}

/// Syntactic email check: `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, non-empty local part, and a domain made
/// of at least two non-empty dot-separated labels.
pub fn is_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

//! Tweet composer rules.

use crate::{CoreError, CoreResult, DEFAULT_MAX_TWEET_LENGTH};

/// Text being composed, checked against a character limit.
///
/// Length counts characters, so an emoji costs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    content: String,
    max_length: usize,
}

impl Draft {
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_limit(content, DEFAULT_MAX_TWEET_LENGTH)
    }

    pub fn with_limit(content: impl Into<String>, max_length: usize) -> Self {
        Self {
            content: content.into(),
            max_length,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Characters left before the limit. Negative once over it.
    pub fn remaining(&self) -> i64 {
        self.max_length as i64 - self.content.chars().count() as i64
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining() < 0
    }

    /// Whether the submit control should be enabled.
    pub fn is_postable(&self) -> bool {
        !self.content.trim().is_empty() && !self.is_over_limit()
    }

    /// Consume the draft, returning its content if it can be posted.
    #[track_caller]
    pub fn into_post(self) -> CoreResult<String> {
        if self.content.trim().is_empty() {
            return Err(CoreError::validation("content", "tweet cannot be empty"));
        }
        if self.is_over_limit() {
            return Err(CoreError::validation(
                "content",
                format!(
                    "tweet is {} characters over the {} character limit",
                    -self.remaining(),
                    self.max_length
                ),
            ));
        }
        Ok(self.content)
    }
}

use crate::{ConfigError, ConfigErrorResult};

use lu_core::{
    DEFAULT_MAX_DISPLAY_NAME_LENGTH, DEFAULT_MAX_TWEET_LENGTH, DEFAULT_MAX_USERNAME_LENGTH,
    DEFAULT_MIN_PASSWORD_LENGTH, FieldLimits,
};
use serde::Deserialize;

// Validation constraints
pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 50;

pub const MIN_DISPLAY_NAME_LENGTH: usize = 1;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 200;

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub const MIN_TWEET_LENGTH: usize = 1;
pub const MAX_TWEET_LENGTH: usize = 10000;

/// Limits applied to form input before anything reaches the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_username_length: usize,
    pub max_display_name_length: usize,
    pub min_password_length: usize,
    pub max_tweet_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_tweet_length: DEFAULT_MAX_TWEET_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "validation.max_username_length",
            self.max_username_length,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        )?;
        Self::check_range(
            "validation.max_display_name_length",
            self.max_display_name_length,
            MIN_DISPLAY_NAME_LENGTH,
            MAX_DISPLAY_NAME_LENGTH,
        )?;
        Self::check_range(
            "validation.min_password_length",
            self.min_password_length,
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH,
        )?;
        Self::check_range(
            "validation.max_tweet_length",
            self.max_tweet_length,
            MIN_TWEET_LENGTH,
            MAX_TWEET_LENGTH,
        )?;

        Ok(())
    }

    /// Limits in the form the domain types consume.
    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_username_length: self.max_username_length,
            max_display_name_length: self.max_display_name_length,
            min_password_length: self.min_password_length,
            max_tweet_length: self.max_tweet_length,
        }
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::validation(format!(
                "{name} must be {min}-{max}, got {value}"
            )));
        }
        Ok(())
    }
}

use crate::validation::{self, FieldLimits};
use crate::{CoreError, CoreResult};

use std::fmt;

/// Sign-up form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl Registration {
    /// Check every field against `limits`, reporting the first violation.
    ///
    /// Field order matches the sign-up form: display name, username, email,
    /// password.
    #[track_caller]
    pub fn validate(&self, limits: &FieldLimits) -> CoreResult<()> {
        let display_name_len = self.display_name.chars().count();
        if self.display_name.trim().is_empty() {
            return Err(CoreError::validation(
                "display_name",
                "display name is required",
            ));
        }
        if display_name_len > limits.max_display_name_length {
            return Err(CoreError::validation(
                "display_name",
                format!(
                    "display name must be at most {} characters, got {}",
                    limits.max_display_name_length, display_name_len
                ),
            ));
        }

        let username_len = self.username.chars().count();
        if self.username.trim().is_empty() {
            return Err(CoreError::validation("username", "username is required"));
        }
        if username_len > limits.max_username_length {
            return Err(CoreError::validation(
                "username",
                format!(
                    "username must be at most {} characters, got {}",
                    limits.max_username_length, username_len
                ),
            ));
        }

        if !validation::is_email(&self.email) {
            return Err(CoreError::validation(
                "email",
                format!("'{}' is not a valid email address", self.email),
            ));
        }

        let password_len = self.password.chars().count();
        if password_len < limits.min_password_length {
            return Err(CoreError::validation(
                "password",
                format!(
                    "password must be at least {} characters",
                    limits.min_password_length
                ),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

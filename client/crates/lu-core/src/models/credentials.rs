use crate::{CoreError, CoreResult};

use std::fmt;

/// Sign-in form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("email", "email is required"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "password is required"));
        }
        Ok(())
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

use crate::provider::{
    IdentityProvider,
    error::{ProviderError, Result as ProviderResult},
};

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use lu_core::{Credentials, DEMO_USER_ID, DEMO_USERNAME, Identity, IdentityBuilder, Registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Accept,
    Reject,
    Unreachable,
}

/// Stand-in provider with canned behavior.
///
/// By default every sign-in succeeds as the demo account (keeping the
/// submitted email) and every sign-up succeeds with a fresh identity.
#[derive(Debug)]
pub struct MockIdentityProvider {
    behavior: Behavior,
    taken_usernames: HashSet<String>,
    taken_emails: HashSet<String>,
    blocked_passwords: HashSet<String>,
    latency: Option<Duration>,
    authenticate_calls: AtomicUsize,
    register_calls: AtomicUsize,
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            behavior: Behavior::Accept,
            taken_usernames: HashSet::new(),
            taken_emails: HashSet::new(),
            blocked_passwords: HashSet::new(),
            latency: None,
            authenticate_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    /// Every exchange fails with rejected credentials.
    pub fn rejecting() -> Self {
        Self {
            behavior: Behavior::Reject,
            ..Self::new()
        }
    }

    /// Every exchange fails as if the network were down.
    pub fn unreachable() -> Self {
        Self {
            behavior: Behavior::Unreachable,
            ..Self::new()
        }
    }

    /// Treat `username` as already registered.
    pub fn with_taken_username(mut self, username: &str) -> Self {
        self.taken_usernames.insert(username.to_lowercase());
        self
    }

    /// Treat `email` as already registered.
    pub fn with_taken_email(mut self, email: &str) -> Self {
        self.taken_emails.insert(email.to_lowercase());
        self
    }

    /// Refuse sign-ups that choose `password`.
    pub fn with_blocked_password(mut self, password: &str) -> Self {
        self.blocked_passwords.insert(password.to_string());
        self
    }

    /// Delay every exchange by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn authenticate_calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    async fn exchange(&self) -> ProviderResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.behavior {
            Behavior::Accept => Ok(()),
            Behavior::Reject => Err(ProviderError::rejected("invalid email or password")),
            Behavior::Unreachable => Err(ProviderError::unreachable("connection refused")),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, credentials: &Credentials) -> ProviderResult<Identity> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        self.exchange().await?;

        debug!("Mock provider accepted sign-in for {}", credentials.email);
        Ok(IdentityBuilder::new(DEMO_USERNAME)
            .id(DEMO_USER_ID)
            .email(&credentials.email)
            .display_name("Demo User")
            .bio("This is a demo account")
            .verified(true)
            .avatar_seed("demo")
            .created_at(Utc::now())
            .build())
    }

    async fn register(&self, registration: &Registration) -> ProviderResult<Identity> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.exchange().await?;

        if self
            .taken_usernames
            .contains(&registration.username.to_lowercase())
        {
            return Err(ProviderError::conflict(
                "username",
                format!("@{} is not available", registration.username),
            ));
        }

        if self.taken_emails.contains(&registration.email.to_lowercase()) {
            return Err(ProviderError::conflict(
                "email",
                format!("{} is already registered", registration.email),
            ));
        }

        if self.blocked_passwords.contains(&registration.password) {
            return Err(ProviderError::policy("That password is too common"));
        }

        debug!("Mock provider registered @{}", registration.username);
        Ok(Identity::new(
            registration.username.clone(),
            registration.email.clone(),
            registration.display_name.clone(),
        ))
    }
}

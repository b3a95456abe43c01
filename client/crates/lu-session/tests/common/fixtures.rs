#![allow(dead_code)]

use std::sync::Arc;

use lu_core::{Credentials, Identity, IdentityBuilder, Registration};
use lu_session::{
    ClientStorage, MemoryStorage, MockIdentityProvider, SessionManager, SessionSettings,
    USER_KEY,
};

/// Manager plus the test doubles behind it, so tests can inspect both.
pub struct TestSession {
    pub manager: SessionManager,
    pub storage: Arc<MemoryStorage>,
    pub provider: Arc<MockIdentityProvider>,
}

pub fn create_test_session(storage: MemoryStorage, provider: MockIdentityProvider) -> TestSession {
    create_test_session_with(storage, provider, SessionSettings::default())
}

pub fn create_test_session_with(
    storage: MemoryStorage,
    provider: MockIdentityProvider,
    settings: SessionSettings,
) -> TestSession {
    let storage = Arc::new(storage);
    let provider = Arc::new(provider);
    let manager = SessionManager::new(storage.clone(), provider.clone(), settings);
    TestSession {
        manager,
        storage,
        provider,
    }
}

/// Storage already holding `identity` under the user key.
pub fn storage_with_identity(identity: &Identity) -> MemoryStorage {
    let json = serde_json::to_string(identity).unwrap();
    MemoryStorage::with_entries([(USER_KEY, json)])
}

pub fn create_test_identity(username: &str) -> Identity {
    IdentityBuilder::new(username)
        .display_name("Test User")
        .bio("Testing things")
        .build()
}

pub fn valid_credentials() -> Credentials {
    Credentials::new("a@b.com", "secret")
}

pub fn valid_registration(username: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: format!("{username}@x.com"),
        password: "secret1".to_string(),
        display_name: "Jo".to_string(),
    }
}

pub fn stored_identity(storage: &MemoryStorage) -> Option<Identity> {
    storage
        .get(USER_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

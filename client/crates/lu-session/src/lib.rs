//! Client session state: who is signed in, where that survives restarts,
//! and which screens may render because of it.

pub mod error;
pub mod guard;
pub mod manager;
pub mod provider;
pub mod route;
pub mod session;
pub mod settings;
pub mod storage;
pub mod theme;

pub use error::{Result as SessionResult, SessionError};
pub use guard::{Decision, RouteGuard};
pub use manager::{SessionHandle, SessionManager};
pub use provider::{
    IdentityProvider, MockIdentityProvider,
    error::{ProviderError, Result as ProviderResult},
};
pub use route::Route;
pub use session::{Session, SessionStatus};
pub use settings::SessionSettings;
pub use storage::{
    ClientStorage, FileStorage, MemoryStorage, THEME_KEY, USER_KEY,
    error::{Result as StorageResult, StorageError},
};
pub use theme::ThemeStore;

pub mod error;
mod mock_provider;

pub use mock_provider::MockIdentityProvider;

use crate::provider::error::Result as ProviderResult;

use async_trait::async_trait;
use lu_core::{Credentials, Identity, Registration};

/// Remote exchange that turns credentials into an [`Identity`].
///
/// Inputs have already passed local validation when these are called.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ProviderResult<Identity>;

    /// Create an account. The returned identity carries a fresh id and is
    /// unverified.
    async fn register(&self, registration: &Registration) -> ProviderResult<Identity>;
}

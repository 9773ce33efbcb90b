use crate::Result as IdentityResult;

use rg_core::{Identity, IdentityMode};

use async_trait::async_trait;

/// Result of a completed sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInIdentity {
    pub identity: Identity,
    pub mode: IdentityMode,
}

/// Seam over the external auth provider.
///
/// `credential` is a pre-issued sign-in token; `None` requests anonymous
/// sign-in. Implementations must never fabricate an identity on failure.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credential: Option<&str>) -> IdentityResult<SignedInIdentity>;
}

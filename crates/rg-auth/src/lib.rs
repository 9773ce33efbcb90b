mod error;
mod provider;
mod rest;

pub use error::{IdentityError, Result};
pub use provider::{IdentityProvider, SignedInIdentity};
pub use rest::RestIdentityProvider;

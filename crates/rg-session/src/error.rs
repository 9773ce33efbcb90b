use std::panic::Location;

use error_location::ErrorLocation;
use rg_auth::IdentityError;
use rg_gen::GenError;
use rg_store::StoreError;
use thiserror::Error;

/// Errors from session operations.
///
/// Everything is caught at the boundary of its triggering operation and
/// turned into user-visible state; nothing crashes the session and nothing
/// is retried automatically.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session is not ready: no identity established {location}")]
    NotReady { location: ErrorLocation },

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Creates NotReady error at caller location.
    #[track_caller]
    pub fn not_ready() -> Self {
        Self::NotReady {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

/// Errors from one reply generation attempt.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Inbound email is empty; nothing to reply to {location}")]
    Validation { location: ErrorLocation },

    #[error(transparent)]
    Service(#[from] GenError),
}

impl GenerateError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation() -> Self {
        Self::Validation {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

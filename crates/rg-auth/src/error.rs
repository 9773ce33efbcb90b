use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from identity acquisition.
///
/// All of these are fatal to the session: without an identity there is no
/// settings document to read and no namespace to save into, so dependent
/// operations must report not-ready instead of inventing a fake identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider request failed: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity provider rejected sign-in ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider returned a malformed response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Creates Rejected error at caller location.
    #[track_caller]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Malformed error at caller location.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

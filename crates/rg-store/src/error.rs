use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Profile store errors.
///
/// Fetch-side failures are recoverable: the caller keeps its last known
/// settings and surfaces a warning. Write-side failures leave the stored
/// document untouched; retry is the user's call.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Profile fetch failed: {message} {location}")]
    Fetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile write failed: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored document is not valid JSON: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates Fetch error at caller location.
    #[track_caller]
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this error came from the write path.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

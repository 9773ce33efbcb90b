use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from a single generation request.
///
/// One attempt per call, nothing retried automatically. `EmptyResult` is a
/// user-visible "try again" condition, not a crash.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Generation request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Generation service returned status {status} {location}")]
    Service { status: u16, location: ErrorLocation },

    #[error("Generation service returned no usable candidates {location}")]
    EmptyResult { location: ErrorLocation },
}

impl GenError {
    /// Creates Service error at caller location.
    #[track_caller]
    pub fn service(status: u16) -> Self {
        Self::Service {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates EmptyResult error at caller location.
    #[track_caller]
    pub fn empty_result() -> Self {
        Self::EmptyResult {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Non-2xx status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

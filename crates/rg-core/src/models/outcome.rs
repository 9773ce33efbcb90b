//! Outcome of the single current generation request.

use serde::{Deserialize, Serialize};

/// Models the one in-flight generation call. At most one outcome is current
/// at a time; a newer request overwrites the previous one and a superseded
/// request must never commit its result over a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "detail")]
pub enum RequestOutcome {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Generated reply text, if the current request succeeded.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            _ => None,
        }
    }
}

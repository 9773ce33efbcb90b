//! Per-session user identity issued by the external auth provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user identifier, stable for the lifetime of a session.
///
/// The provider issues it once sign-in completes; it is never synthesized
/// locally. Code that needs an identity before sign-in finishes must treat
/// the session as not ready.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the identity was obtained.
///
/// `AnonymousFallback` marks a sign-in that was asked to use a pre-issued
/// credential but ended up anonymous. The fallback identity owns a different
/// settings namespace, so callers surface the mode instead of hiding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    Token,
    Anonymous,
    AnonymousFallback,
}

impl IdentityMode {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::AnonymousFallback)
    }
}

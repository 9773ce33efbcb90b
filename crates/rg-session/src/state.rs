//! Session and settings-sync state machines.

use rg_core::{Identity, IdentityMode};

/// Identity acquisition lifecycle.
///
/// `AuthFailed` is terminal for dependent operations: no settings
/// subscription starts and saves/generation report not-ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Authenticating,
    Ready,
    AuthFailed,
}

/// Settings subscription lifecycle within a Ready session.
///
/// `Synced` is re-entered on every pushed update. `SubscriptionFailed` does
/// not tear down Ready; the identity stays usable for saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Subscribing,
    Synced,
    SubscriptionFailed,
}

/// Point-in-time snapshot of the controller's state.
#[derive(Debug, Clone)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub sync: SyncPhase,
    pub identity: Option<Identity>,
    pub mode: Option<IdentityMode>,
}

impl SessionStatus {
    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }
}

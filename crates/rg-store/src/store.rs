use crate::{Result as StoreResult, SettingsSubscription};

use rg_core::{Identity, SettingsDocument};

use async_trait::async_trait;

/// One update pushed to a settings subscription.
///
/// `Absent` means no document exists at the path. Consumers synthesize
/// defaults for it; the store itself never writes defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    Present(SettingsDocument),
    Absent,
}

/// Document path for an identity's settings.
pub fn settings_path(app_id: &str, identity: &Identity) -> String {
    format!("artifacts/{app_id}/users/{identity}/companyData/details")
}

/// Document-oriented store holding one settings document per identity.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Open a live subscription at `path`.
    ///
    /// The first event reflects current state; each committed save produces
    /// a further event, delivered in commit order. Dropping the subscription
    /// unsubscribes.
    async fn subscribe(&self, path: &str) -> StoreResult<SettingsSubscription>;

    /// Full-document overwrite at `path`. No field-level merge.
    async fn save(&self, path: &str, document: &SettingsDocument) -> StoreResult<()>;
}

//! Company profile settings used to steer reply generation.

use serde::{Deserialize, Serialize};

/// Default mission shown when an identity has never saved settings.
pub const DEFAULT_MISSION: &str = "Our company, Seamless Source, is a leader in the fashion \
     industry, offering a revolutionary DPP (Digital Product Passport) product that helps brands \
     track their supply chain, ensure ethical sourcing, and build trust with their customers.";

/// Default sender name for unsaved settings.
pub const DEFAULT_SENDER_NAME: &str = "The Seamless Source Team";

/// Default sender email for unsaved settings.
pub const DEFAULT_SENDER_EMAIL: &str = "team@seamlesssource.com";

/// In-memory company settings, one set per identity.
///
/// Always fully populated: when the store holds no document for an identity,
/// the defaults below are synthesized client-side. They are NOT written back
/// to the store; the store stays empty until the user explicitly saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub mission: String,
    pub sender_name: String,
    pub sender_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mission: String::from(DEFAULT_MISSION),
            sender_name: String::from(DEFAULT_SENDER_NAME),
            sender_email: String::from(DEFAULT_SENDER_EMAIL),
        }
    }
}

impl Settings {
    /// Sender attribution line embedded in the generation prompt.
    pub fn sender_line(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_email)
    }
}

/// Stored document shape at the identity's settings path.
///
/// Field names are camelCase on the wire to stay compatible with documents
/// written by earlier deployments of this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub mission: String,
    pub sender_name: String,
    pub sender_email: String,
}

impl From<Settings> for SettingsDocument {
    fn from(settings: Settings) -> Self {
        Self {
            mission: settings.mission,
            sender_name: settings.sender_name,
            sender_email: settings.sender_email,
        }
    }
}

impl From<SettingsDocument> for Settings {
    fn from(doc: SettingsDocument) -> Self {
        Self {
            mission: doc.mission,
            sender_name: doc.sender_name,
            sender_email: doc.sender_email,
        }
    }
}

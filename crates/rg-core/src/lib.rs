pub mod models;

#[cfg(test)]
mod tests;

pub use models::identity::{Identity, IdentityMode};
pub use models::outcome::RequestOutcome;
pub use models::settings::{
    DEFAULT_MISSION, DEFAULT_SENDER_EMAIL, DEFAULT_SENDER_NAME, Settings, SettingsDocument,
};

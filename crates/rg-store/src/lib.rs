pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;
pub mod subscription;

pub use error::{Result, StoreError};
pub use memory::MemoryProfileStore;
pub use sqlite::SqliteProfileStore;
pub use store::{DocumentEvent, ProfileStore, settings_path};
pub use subscription::SettingsSubscription;

//! SQLite-backed profile store.
//!
//! Documents live in one table keyed by path, body stored as JSON. Each
//! committed save is published to the path's broadcast channel; a store-wide
//! write lock serializes commit+publish so subscribers observe events in
//! commit order.

use crate::subscription::StreamItem;
use crate::{
    DocumentEvent, ProfileStore, Result as StoreResult, SettingsSubscription, StoreError,
};

use rg_core::SettingsDocument;

use std::collections::HashMap;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::{Row, SqlitePool};
use tokio::sync::{Mutex, broadcast};

const CHANNEL_CAPACITY: usize = 64;

pub struct SqliteProfileStore {
    pool: SqlitePool,
    channels: StdMutex<HashMap<String, broadcast::Sender<StreamItem>>>,
    // Held across commit+publish; delivery order must equal commit order.
    write_lock: Mutex<()>,
}

impl SqliteProfileStore {
    /// Create the store and run the schema migration.
    pub async fn new(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(
            r#"
                CREATE TABLE IF NOT EXISTS rg_documents (
                    path TEXT PRIMARY KEY,
                    body TEXT NOT NULL,
                    updated_at INTEGER NOT NULL
                )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::write(format!("schema migration failed: {e}")))?;

        Ok(Self {
            pool,
            channels: StdMutex::new(HashMap::new()),
            write_lock: Mutex::new(()),
        })
    }

    async fn fetch(&self, path: &str) -> StoreResult<Option<SettingsDocument>> {
        let row = sqlx::query("SELECT body FROM rg_documents WHERE path = ?")
            .bind(path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::fetch(e.to_string()))?;

        match row {
            Some(row) => {
                let body: String = row
                    .try_get("body")
                    .map_err(|e| StoreError::fetch(e.to_string()))?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            None => Ok(None),
        }
    }

    fn sender_for(&self, path: &str) -> broadcast::Sender<StreamItem> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(path.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn subscribe(&self, path: &str) -> StoreResult<SettingsSubscription> {
        // Receiver attaches before the initial read, under the write lock,
        // so no committed save can fall between snapshot and stream.
        let _guard = self.write_lock.lock().await;

        let rx = self.sender_for(path).subscribe();
        let initial = match self.fetch(path).await? {
            Some(document) => DocumentEvent::Present(document),
            None => DocumentEvent::Absent,
        };

        debug!("Subscribed to {path}");
        Ok(SettingsSubscription::new(initial, rx))
    }

    async fn save(&self, path: &str, document: &SettingsDocument) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let body = serde_json::to_string(document)?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO rg_documents (path, body, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(path) DO UPDATE SET
                    body = excluded.body,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(path)
        .bind(&body)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write(e.to_string()))?;

        // Nobody listening is fine; send errors only mean zero receivers.
        let _ = self
            .sender_for(path)
            .send(StreamItem::Event(DocumentEvent::Present(document.clone())));

        debug!("Saved document at {path}");
        Ok(())
    }
}

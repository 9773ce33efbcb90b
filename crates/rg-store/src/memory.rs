//! In-memory profile store with the same contract as the SQLite store.
//!
//! Used by tests and ephemeral runs. Carries fault-injection hooks so
//! consumers can exercise fetch/write failure paths without a real backend.

use crate::subscription::StreamItem;
use crate::{
    DocumentEvent, ProfileStore, Result as StoreResult, SettingsSubscription, StoreError,
};

use rg_core::SettingsDocument;

use std::collections::HashMap;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, broadcast};

const CHANNEL_CAPACITY: usize = 64;

#[derive(Default)]
pub struct MemoryProfileStore {
    documents: StdMutex<HashMap<String, SettingsDocument>>,
    channels: StdMutex<HashMap<String, broadcast::Sender<StreamItem>>>,
    write_lock: Mutex<()>,
    fail_subscribes: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent subscribe calls fail with a fetch error.
    pub fn fail_subscribes(&self, fail: bool) {
        self.fail_subscribes.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent save calls fail with a write error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Push a mid-stream failure to live subscribers of `path`.
    pub fn inject_stream_failure(&self, path: &str, message: &str) {
        let _ = self
            .sender_for(path)
            .send(StreamItem::Failed(message.to_string()));
    }

    /// Direct read, bypassing subscriptions. Test convenience.
    pub fn document(&self, path: &str) -> Option<SettingsDocument> {
        self.documents.lock().unwrap().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().unwrap().is_empty()
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
impl ProfileStore for MemoryProfileStore {
    async fn subscribe(&self, path: &str) -> StoreResult<SettingsSubscription> {
        if self.fail_subscribes.load(Ordering::SeqCst) {
            return Err(StoreError::fetch("injected subscribe failure"));
        }

        let _guard = self.write_lock.lock().await;

        let rx = self.sender_for(path).subscribe();
        let initial = match self.documents.lock().unwrap().get(path) {
            Some(document) => DocumentEvent::Present(document.clone()),
            None => DocumentEvent::Absent,
        };

        Ok(SettingsSubscription::new(initial, rx))
    }

    async fn save(&self, path: &str, document: &SettingsDocument) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::write("injected save failure"));
        }

        let _guard = self.write_lock.lock().await;

        self.documents
            .lock()
            .unwrap()
            .insert(path.to_string(), document.clone());

        let _ = self
            .sender_for(path)
            .send(StreamItem::Event(DocumentEvent::Present(document.clone())));

        Ok(())
    }
}

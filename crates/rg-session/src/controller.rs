//! Session controller: identity acquisition plus settings synchronization.

use crate::{SessionError, SessionPhase, SessionStatus, SyncPhase};

use rg_auth::{IdentityProvider, SignedInIdentity};
use rg_core::{Identity, IdentityMode, Settings};
use rg_store::{DocumentEvent, ProfileStore, settings_path};

use std::sync::{Arc, Mutex as StdMutex};

use log::{info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct Inner {
    phase: SessionPhase,
    identity: Option<Identity>,
    mode: Option<IdentityMode>,
    sub_task: Option<JoinHandle<()>>,
}

/// Owns the identity, keeps in-memory Settings synchronized with the
/// profile store, and gates dependent operations on readiness.
///
/// Settings flow through a watch channel: the subscription fold task is the
/// single writer, every reader clones the current value.
pub struct SessionController {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    app_id: String,
    credential: Option<String>,
    inner: Arc<StdMutex<Inner>>,
    settings_tx: Arc<watch::Sender<Settings>>,
    settings_rx: watch::Receiver<Settings>,
    sync_tx: Arc<watch::Sender<SyncPhase>>,
    sync_rx: watch::Receiver<SyncPhase>,
}

impl SessionController {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        app_id: &str,
        credential: Option<String>,
    ) -> Self {
        // Fully populated before the first sync; defaults, never empty.
        let (settings_tx, settings_rx) = watch::channel(Settings::default());
        let (sync_tx, sync_rx) = watch::channel(SyncPhase::Idle);

        Self {
            provider,
            store,
            app_id: app_id.to_string(),
            credential,
            inner: Arc::new(StdMutex::new(Inner {
                phase: SessionPhase::Uninitialized,
                identity: None,
                mode: None,
                sub_task: None,
            })),
            settings_tx: Arc::new(settings_tx),
            settings_rx,
            sync_tx: Arc::new(sync_tx),
            sync_rx,
        }
    }

    /// Acquire an identity and start the settings subscription.
    ///
    /// On provider failure the session enters AuthFailed: no identity is
    /// set, no subscription starts, and dependent operations return
    /// NotReady. Calling again re-attempts from scratch; a previous
    /// subscription bound to a stale identity is cancelled first.
    pub async fn initialize(&self) -> Result<SignedInIdentity, SessionError> {
        {
            let mut inner = self.inner.lock().unwrap();
            if let Some(task) = inner.sub_task.take() {
                task.abort();
            }
            inner.phase = SessionPhase::Authenticating;
            inner.identity = None;
            inner.mode = None;
        }
        let _ = self.sync_tx.send(SyncPhase::Idle);

        let signed_in = match self.provider.sign_in(self.credential.as_deref()).await {
            Ok(signed_in) => signed_in,
            Err(e) => {
                warn!("Identity acquisition failed: {e}");
                self.inner.lock().unwrap().phase = SessionPhase::AuthFailed;
                return Err(SessionError::Identity(e));
            }
        };

        let _ = self.sync_tx.send(SyncPhase::Subscribing);
        let path = settings_path(&self.app_id, &signed_in.identity);
        let task = self.spawn_subscription(path);

        {
            let mut inner = self.inner.lock().unwrap();
            inner.phase = SessionPhase::Ready;
            inner.identity = Some(signed_in.identity.clone());
            inner.mode = Some(signed_in.mode);
            inner.sub_task = Some(task);
        }

        info!(
            "Session ready: identity={} mode={:?}",
            signed_in.identity, signed_in.mode
        );
        Ok(signed_in)
    }

    /// Fold the document stream into in-memory Settings.
    ///
    /// Present replaces Settings verbatim; Absent synthesizes the defaults
    /// without writing them back. A stream error marks SubscriptionFailed
    /// and keeps the last known Settings; the stream is then resumed, since
    /// later pushes may still arrive.
    fn spawn_subscription(&self, path: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let settings_tx = Arc::clone(&self.settings_tx);
        let sync_tx = Arc::clone(&self.sync_tx);

        tokio::spawn(async move {
            let mut subscription = match store.subscribe(&path).await {
                Ok(subscription) => subscription,
                Err(e) => {
                    warn!("Settings subscription failed to open: {e}");
                    let _ = sync_tx.send(SyncPhase::SubscriptionFailed);
                    return;
                }
            };

            loop {
                match subscription.next().await {
                    Ok(Some(DocumentEvent::Present(document))) => {
                        let _ = settings_tx.send(document.into());
                        let _ = sync_tx.send(SyncPhase::Synced);
                    }
                    Ok(Some(DocumentEvent::Absent)) => {
                        let _ = settings_tx.send(Settings::default());
                        let _ = sync_tx.send(SyncPhase::Synced);
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Settings subscription error: {e}");
                        let _ = sync_tx.send(SyncPhase::SubscriptionFailed);
                    }
                }
            }
        })
    }

    /// Current in-memory Settings; NotReady before a successful initialize.
    pub fn current_settings(&self) -> Result<Settings, SessionError> {
        self.require_ready()?;
        Ok(self.settings_rx.borrow().clone())
    }

    /// Watch handle over in-memory Settings, for callers that react to
    /// pushed updates. Available regardless of readiness.
    pub fn settings_watch(&self) -> watch::Receiver<Settings> {
        self.settings_rx.clone()
    }

    /// Full-document overwrite of the identity's settings.
    ///
    /// In-memory Settings are not touched here; the store's own
    /// subscription push after a successful save is what updates them, so a
    /// failed save leaves the previous values intact everywhere.
    pub async fn save_settings(&self, settings: Settings) -> Result<(), SessionError> {
        let identity = self.require_ready()?;
        let path = settings_path(&self.app_id, &identity);

        self.store.save(&path, &settings.into()).await?;
        info!("Settings saved for {identity}");
        Ok(())
    }

    /// Await the first settled sync phase after initialize.
    ///
    /// Resolves on Synced or SubscriptionFailed; callers that need settings
    /// immediately after startup use this instead of racing the fold task.
    pub async fn wait_until_synced(&self) -> Result<SyncPhase, SessionError> {
        self.require_ready()?;

        let mut rx = self.sync_rx.clone();
        let phase = *rx
            .wait_for(|p| matches!(p, SyncPhase::Synced | SyncPhase::SubscriptionFailed))
            .await
            .map_err(|_| SessionError::not_ready())?;
        Ok(phase)
    }

    pub fn status(&self) -> SessionStatus {
        let inner = self.inner.lock().unwrap();
        SessionStatus {
            phase: inner.phase,
            sync: *self.sync_rx.borrow(),
            identity: inner.identity.clone(),
            mode: inner.mode,
        }
    }

    /// Cancel the settings subscription. Also runs on drop.
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(task) = inner.sub_task.take() {
            task.abort();
        }
        let _ = self.sync_tx.send(SyncPhase::Idle);
    }

    fn require_ready(&self) -> Result<Identity, SessionError> {
        let inner = self.inner.lock().unwrap();
        match (&inner.phase, &inner.identity) {
            (SessionPhase::Ready, Some(identity)) => Ok(identity.clone()),
            _ => Err(SessionError::not_ready()),
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

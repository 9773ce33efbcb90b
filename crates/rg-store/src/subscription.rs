use crate::{DocumentEvent, Result as StoreResult, StoreError};

use tokio::sync::broadcast;

/// Items published on a subscription channel.
///
/// Errors cross the channel as plain strings because broadcast requires
/// Clone; they are rehydrated into StoreError on the consumer side.
#[derive(Debug, Clone)]
pub(crate) enum StreamItem {
    Event(DocumentEvent),
    Failed(String),
}

/// Live stream of document-or-absent events for one path.
///
/// Dropping the subscription releases the underlying channel receiver,
/// which is the unsubscribe.
#[derive(Debug)]
pub struct SettingsSubscription {
    initial: Option<DocumentEvent>,
    rx: broadcast::Receiver<StreamItem>,
}

impl SettingsSubscription {
    pub(crate) fn new(initial: DocumentEvent, rx: broadcast::Receiver<StreamItem>) -> Self {
        Self {
            initial: Some(initial),
            rx,
        }
    }

    /// Next event, in store-commit order.
    ///
    /// `Ok(None)` means the store side closed the stream. A lagged receiver
    /// skips straight to newer events; intermediate states were already
    /// superseded, so nothing meaningful is lost.
    pub async fn next(&mut self) -> StoreResult<Option<DocumentEvent>> {
        if let Some(event) = self.initial.take() {
            return Ok(Some(event));
        }

        loop {
            match self.rx.recv().await {
                Ok(StreamItem::Event(event)) => return Ok(Some(event)),
                Ok(StreamItem::Failed(message)) => return Err(StoreError::fetch(message)),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return Ok(None),
            }
        }
    }
}

//! Change notification fan-out.
//!
//! A successful write broadcasts the identifier it changed. There is no
//! payload and no diff; subscribers re-query to learn the new state.
//! Lagging or absent receivers never block or fail a write.

use stockroom_core::resource::ResourceUri;
use tokio::sync::broadcast;

/// Receiver half of the change feed, as handed out by
/// [`RecordProvider::subscribe`](crate::RecordProvider::subscribe).
pub type ChangeFeed = broadcast::Receiver<ResourceUri>;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub(crate) struct ChangeHub {
  tx: broadcast::Sender<ResourceUri>,
}

impl ChangeHub {
  pub(crate) fn new() -> Self {
    let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
    Self { tx }
  }

  pub(crate) fn subscribe(&self) -> ChangeFeed { self.tx.subscribe() }

  /// Fire-and-forget: a send with no live receivers is not an error.
  pub(crate) fn notify(&self, uri: ResourceUri) {
    tracing::debug!(%uri, "change notification");
    let _ = self.tx.send(uri);
  }
}

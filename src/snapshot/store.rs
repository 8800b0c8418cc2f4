use std::sync::Arc;

use tokio::sync::RwLock;

use super::Snapshot;

/// Concurrency-safe cache of the latest committed [`Snapshot`].
///
/// The snapshot sits behind an `Arc` that is swapped wholesale on commit,
/// so a reader either sees the previous cycle's quotes or the new cycle's,
/// never a mix. A reader's `Arc` clone stays valid across later commits.
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Starts with all prices unknown; the first completed cycle replaces it.
    pub fn new() -> Self {
        SnapshotStore {
            current: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    pub async fn read(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Replace the committed snapshot in one swap. Called once per completed
    /// refresh cycle; there is no other mutation path.
    pub async fn commit(&self, snapshot: Snapshot) {
        *self.current.write().await = Arc::new(snapshot);
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

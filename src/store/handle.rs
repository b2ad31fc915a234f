use super::memory::SetStore;

use std::sync::Arc;
use tokio::sync::OnceCell;

/// Shared handle to the sticky-set store.
///
/// The handle is created once at process start and cloned into every request.
/// The store itself is initialized lazily on first acquire; subsequent
/// acquires reuse the same instance, so acquiring is idempotent and cheap.
/// There is no connected/disconnected state to track and nothing to tear
/// down between requests.
#[derive(Clone, Default)]
pub struct StoreHandle {
    inner: Arc<OnceCell<Arc<SetStore>>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared store, initializing it if this is the first acquire.
    pub async fn acquire(&self) -> Arc<SetStore> {
        self.inner
            .get_or_init(|| async {
                tracing::info!("Opening sticky-set store");
                Arc::new(SetStore::new())
            })
            .await
            .clone()
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::error;

use crate::error::{StoreError, StoreResult};
use crate::file::JsonFileBackend;
use crate::store::DocumentStore;
use crate::traits::Backend;

/// Lazily opened [`DocumentStore`] shared by every request.
///
/// The first successful [`initialize`](Self::initialize) loads the document
/// and caches the handle; later calls return the same handle without
/// touching storage. A failed load is not cached, so the next call tries
/// again.
pub struct StoreCell {
    backend: Arc<dyn Backend>,
    store: OnceCell<Arc<DocumentStore>>,
}

impl StoreCell {
    /// Cell over a JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(Arc::new(JsonFileBackend::new(path)))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            store: OnceCell::new(),
        }
    }

    /// Cell that is already initialized with `store`, sharing its backend.
    pub fn from_store(store: Arc<DocumentStore>) -> Self {
        Self {
            backend: store.backend(),
            store: OnceCell::new_with(Some(store)),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    /// Open the store on first call, return the cached handle afterwards.
    pub async fn initialize(&self) -> StoreResult<Arc<DocumentStore>> {
        self.store
            .get_or_try_init(|| async {
                let location = self.backend.location();
                match DocumentStore::open(Arc::clone(&self.backend)).await {
                    Ok(store) => Ok(Arc::new(store)),
                    Err(e) => {
                        error!(error = %e, "failed to initialize datastore, check {location}");
                        Err(StoreError::Init {
                            location,
                            reason: e.to_string(),
                        })
                    }
                }
            })
            .await
            .cloned()
    }
}

impl std::fmt::Debug for StoreCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCell")
            .field("location", &self.backend.location())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::document::Document;
use crate::error::StoreResult;
use crate::traits::Backend;

/// Backend that keeps the "persisted" document in memory.
///
/// Intended for tests and embedding. It records how many times the document
/// was persisted so callers can check that mutations reached the backend.
pub struct MemoryBackend {
    stored: Mutex<Document>,
    persists: AtomicUsize,
}

impl MemoryBackend {
    /// Create a backend whose first `load` returns `document`.
    pub fn new(document: Document) -> Self {
        Self {
            stored: Mutex::new(document),
            persists: AtomicUsize::new(0),
        }
    }

    /// The most recently persisted document.
    pub fn stored(&self) -> Document {
        self.stored.lock().expect("lock poisoned").clone()
    }

    /// Number of successful `persist` calls.
    pub fn persist_count(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn load(&self) -> StoreResult<Document> {
        Ok(self.stored())
    }

    async fn persist(&self, document: &Document) -> StoreResult<()> {
        *self.stored.lock().expect("lock poisoned") = document.clone();
        self.persists.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}

impl std::fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("persist_count", &self.persist_count())
            .finish()
    }
}

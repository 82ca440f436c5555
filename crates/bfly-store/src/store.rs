use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::document::{Collection, Document};
use crate::error::StoreResult;
use crate::file::JsonFileBackend;
use crate::memory::MemoryBackend;
use crate::traits::Backend;

/// In-memory document plus the backend it is persisted to.
///
/// Reads clone records out of the document. Every mutation holds the write
/// lock until the backend has persisted the whole document, so mutations
/// within one process never interleave. A mutation is staged on a copy of
/// the document and only becomes visible once the persist succeeded.
/// Scans are linear and preserve insertion order.
pub struct DocumentStore {
    backend: Arc<dyn Backend>,
    document: RwLock<Document>,
}

impl DocumentStore {
    /// Load the document from `backend`.
    pub async fn open(backend: Arc<dyn Backend>) -> StoreResult<Self> {
        let document = backend.load().await?;
        info!(
            location = %backend.location(),
            butterflies = document.butterflies.len(),
            users = document.users.len(),
            ratings = document.ratings.len(),
            "datastore loaded"
        );
        Ok(Self {
            backend,
            document: RwLock::new(document),
        })
    }

    /// Write `document` to a JSON file at `path`, replacing whatever was
    /// there, and return a store over it.
    pub async fn create(path: impl Into<PathBuf>, document: Document) -> StoreResult<Self> {
        let backend = JsonFileBackend::new(path);
        backend.persist(&document).await?;
        Ok(Self {
            backend: Arc::new(backend),
            document: RwLock::new(document),
        })
    }

    /// A store that never touches disk.
    pub fn in_memory(document: Document) -> Self {
        Self {
            backend: Arc::new(MemoryBackend::new(document.clone())),
            document: RwLock::new(document),
        }
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    pub(crate) fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    /// Copy of the current in-memory document.
    pub async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }

    /// Every record of a collection, in insertion order.
    pub async fn get<R: Collection>(&self) -> Vec<R> {
        R::items(&*self.document.read().await).clone()
    }

    /// First record matching `predicate`.
    pub async fn find<R, P>(&self, predicate: P) -> Option<R>
    where
        R: Collection,
        P: Fn(&R) -> bool,
    {
        let document = self.document.read().await;
        R::items(&document).iter().find(|r| predicate(r)).cloned()
    }

    pub async fn find_by_id<R: Collection>(&self, id: &str) -> Option<R> {
        self.find(|r: &R| r.id() == id).await
    }

    pub async fn contains<R: Collection>(&self, id: &str) -> bool {
        let document = self.document.read().await;
        R::items(&document).iter().any(|r| r.id() == id)
    }

    /// All records matching `predicate`, in insertion order.
    pub async fn filter<R, P>(&self, predicate: P) -> Vec<R>
    where
        R: Collection,
        P: Fn(&R) -> bool,
    {
        let document = self.document.read().await;
        R::items(&document)
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Append `record` to its collection and persist.
    pub async fn push<R: Collection>(&self, record: R) -> StoreResult<R> {
        let mut document = self.document.write().await;
        let mut next = document.clone();
        R::items_mut(&mut next).push(record.clone());
        self.commit(&mut document, next).await?;
        Ok(record)
    }

    /// Apply `patch` to the first record matching `predicate` and persist.
    ///
    /// Returns the updated record, or `None` (without persisting) when
    /// nothing matched.
    pub async fn assign<R, P, F>(&self, predicate: P, patch: F) -> StoreResult<Option<R>>
    where
        R: Collection,
        P: Fn(&R) -> bool,
        F: FnOnce(&mut R),
    {
        let mut document = self.document.write().await;
        let Some(index) = R::items(&document).iter().position(|r| predicate(r)) else {
            return Ok(None);
        };
        let mut next = document.clone();
        let record = &mut R::items_mut(&mut next)[index];
        patch(record);
        let updated = record.clone();
        self.commit(&mut document, next).await?;
        Ok(Some(updated))
    }

    /// Delete every record matching `predicate` and persist.
    ///
    /// Returns the removed records; an empty result means nothing matched
    /// and nothing was written.
    pub async fn remove<R, P>(&self, predicate: P) -> StoreResult<Vec<R>>
    where
        R: Collection,
        P: Fn(&R) -> bool,
    {
        let mut document = self.document.write().await;
        let (removed, kept): (Vec<R>, Vec<R>) =
            R::items(&document).iter().cloned().partition(|r| predicate(r));
        if removed.is_empty() {
            return Ok(removed);
        }
        let mut next = document.clone();
        *R::items_mut(&mut next) = kept;
        self.commit(&mut document, next).await?;
        Ok(removed)
    }

    /// Persist `next` and only then make it the in-memory document. On a
    /// failed persist `current` is left untouched.
    async fn commit(&self, current: &mut Document, next: Document) -> StoreResult<()> {
        self.backend.persist(&next).await?;
        *current = next;
        Ok(())
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("location", &self.location())
            .finish()
    }
}

use std::sync::Arc;

use bfly_store::StoreCell;
use bfly_types::{IdGenerator, RandomIdGenerator};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreCell>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: Arc<StoreCell>) -> Self {
        Self {
            store,
            ids: Arc::new(RandomIdGenerator),
        }
    }

    /// Replace the id generator (tests use a fixed sequence).
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").field("store", &self.store).finish()
    }
}

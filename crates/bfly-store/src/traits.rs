use async_trait::async_trait;

use crate::document::Document;
use crate::error::StoreResult;

/// Where a [`Document`] is loaded from and written back to.
///
/// Implementations must satisfy these invariants:
/// - `persist` writes the complete document; there are no partial writes.
/// - A `load` after a successful `persist` returns the persisted document.
/// - All I/O errors are propagated, never silently ignored.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Read the whole document.
    async fn load(&self) -> StoreResult<Document>;

    /// Replace the stored document with `document`.
    async fn persist(&self, document: &Document) -> StoreResult<()>;

    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::document::Document;
use crate::error::StoreResult;
use crate::traits::Backend;

/// Document stored as pretty-printed JSON in a single file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the
/// target, so a reader never observes a half-written document.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Backend for JsonFileBackend {
    async fn load(&self) -> StoreResult<Document> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn persist(&self, document: &Document) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "datastore persisted");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use bfly_types::User;

    #[tokio::test]
    async fn persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        let mut doc = Document::new();
        doc.users.push(User { id: "u1".into(), username: "flutterby".into() });

        backend.persist(&doc).await.unwrap();
        assert_eq!(backend.load().await.unwrap(), doc);
        assert!(!backend.temp_path().exists());
    }

    #[tokio::test]
    async fn persist_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("nested/deeper/db.json"));
        backend.persist(&Document::new()).await.unwrap();
        assert!(backend.path().exists());
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("absent.json"));
        assert!(matches!(backend.load().await, Err(StoreError::Io(_))));
    }

    #[tokio::test]
    async fn load_invalid_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let backend = JsonFileBackend::new(&path);
        assert!(matches!(backend.load().await, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn written_file_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        backend.persist(&Document::new()).await.unwrap();
        let text = std::fs::read_to_string(backend.path()).unwrap();
        assert!(text.contains("\n  \"butterflies\": []"));
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let backend = JsonFileBackend::new("/data/butterflies.db.json");
        assert_eq!(backend.temp_path(), PathBuf::from("/data/butterflies.db.json.tmp"));
        assert_eq!(backend.location(), "/data/butterflies.db.json");
    }
}

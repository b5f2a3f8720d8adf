//! Persistence adapters: the progress record as an opaque blob under one key

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::StoreError;

/// Key-value blob storage for exactly one key
pub trait ProgressStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn save(&mut self, blob: &str) -> Result<(), StoreError>;
}

/// Volatile store for tests and `--memory` runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with a blob, as if saved by an earlier session
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            saves: 0,
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// One JSON file per key: `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(format!("{}.json", key));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&self.path, blob)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "progress saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("{\"level\":1}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"level\":1}"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_file_store_path_uses_key() {
        let store = FileStore::new("/tmp/gv", "grayVerdictProgress");
        assert_eq!(store.path(), Path::new("/tmp/gv/grayVerdictProgress.json"));
    }
}

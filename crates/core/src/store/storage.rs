//! Key-value document storage backends.

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::StoreError;

/// A string-keyed document store.
///
/// Implementations must make `save` atomic with respect to `load`: a
/// reader sees either the previous document or the new one.
pub trait Storage: Send + Sync {
    /// Load the document stored under `key`, if any.
    fn load(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Replace the document stored under `key`.
    fn save(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete the document stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Per-process sequence for temp file names.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// One `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(key: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_owned(),
            source,
        }
    }
}

impl Storage for FileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Self::io_error(key, e))?;

        // Write beside the target and rename over it so readers never see
        // a half-written document. Each save gets its own temp file.
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = self
            .dir
            .join(format!(".{key}.{}.{seq}.tmp", std::process::id()));
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| Self::io_error(key, e))?;
        if let Err(e) = tokio::fs::rename(&tmp, self.path_for(key)).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(Self::io_error(key, e));
        }

        tracing::debug!(key, bytes = value.len(), "Saved document");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

/// In-process storage, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.documents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents().get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.documents().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.documents().remove(key);
        Ok(())
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use hartna_core::store::{CatalogStore, FileStorage};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The admin never caches catalog reads: every
/// page shows what is in storage right now.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: CatalogStore<FileStorage>,
}

impl AppState {
    /// Create application state backed by the configured data directory.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let store = CatalogStore::new(FileStorage::new(&config.data_dir));
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore<FileStorage> {
        &self.inner.store
    }
}

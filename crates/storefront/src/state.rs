//! Application state shared across handlers.

use std::sync::Arc;

use hartna_core::Catalog;
use hartna_core::store::{CatalogStore, FileStorage, StoreError};
use moka::future::Cache;
use tracing::debug;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Catalog reads go through a short-lived
/// snapshot cache; message writes go straight to the store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: CatalogStore<FileStorage>,
    catalog_cache: Option<Cache<(), Arc<Catalog>>>,
}

impl AppState {
    /// Create application state backed by the configured data directory.
    ///
    /// A zero catalog TTL disables snapshot caching.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = CatalogStore::new(FileStorage::new(&config.data_dir));
        let catalog_cache = (!config.catalog_ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(1)
                .time_to_live(config.catalog_ttl)
                .build()
        });

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog_cache,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore<FileStorage> {
        &self.inner.store
    }

    /// Current catalog snapshot, at most one TTL old.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn catalog(&self) -> Result<Arc<Catalog>, StoreError> {
        let Some(cache) = &self.inner.catalog_cache else {
            return Ok(Arc::new(self.inner.store.snapshot().await?));
        };

        if let Some(catalog) = cache.get(&()).await {
            debug!("Cache hit for catalog");
            return Ok(catalog);
        }

        let catalog = Arc::new(self.inner.store.snapshot().await?);
        cache.insert((), Arc::clone(&catalog)).await;
        Ok(catalog)
    }
}

//! Command implementations.
//!
//! Commands that touch the catalog open the same data directory as the
//! storefront and admin panel (`HARTNA_DATA_DIR`, default `data`).

pub mod messages;
pub mod password;
pub mod seed;
pub mod settings;

use std::path::PathBuf;

use hartna_admin::services::AuthError;
use hartna_core::store::{CatalogStore, FileStorage, StoreError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog storage failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Password could not be hashed.
    #[error("Password error: {0}")]
    Password(#[from] AuthError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Data directory from the environment.
pub fn data_dir() -> PathBuf {
    std::env::var("HARTNA_DATA_DIR").map_or_else(|_| PathBuf::from("data"), PathBuf::from)
}

/// Catalog store over `dir`.
pub fn open_store(dir: PathBuf) -> CatalogStore<FileStorage> {
    tracing::debug!(data_dir = %dir.display(), "Opening catalog store");
    CatalogStore::new(FileStorage::new(dir))
}

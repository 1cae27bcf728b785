//! Seed the data directory with the default catalog.

use hartna_core::store::{CatalogStore, Storage};
use tracing::info;

use super::{CliError, data_dir, open_store};

/// Seed the configured data directory.
///
/// # Errors
///
/// Returns an error if the documents cannot be written.
pub async fn run(force: bool) -> Result<(), CliError> {
    let dir = data_dir();
    info!(data_dir = %dir.display(), force, "Seeding catalog");
    seed(&open_store(dir), force).await
}

async fn seed<S: Storage>(store: &CatalogStore<S>, force: bool) -> Result<(), CliError> {
    let written = store.seed(force).await?;

    if written.is_empty() {
        info!("Every collection already exists; use --force to overwrite");
    } else {
        for key in &written {
            info!("  wrote {key}");
        }
        info!("Seeding complete: {} collections written", written.len());
    }
    Ok(())
}

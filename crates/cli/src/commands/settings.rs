//! Site settings maintenance.

use super::{CliError, data_dir, open_store};

/// Replace the stored settings with the defaults.
///
/// # Errors
///
/// Returns an error if the settings cannot be written.
pub async fn reset() -> Result<(), CliError> {
    let settings = open_store(data_dir()).reset_settings().await?;
    tracing::info!(site_name = %settings.site_name, "Site settings reset to defaults");
    Ok(())
}

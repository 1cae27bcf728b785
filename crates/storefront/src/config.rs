//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `HARTNA_DATA_DIR` - Catalog data directory (default: data)
//! - `HARTNA_UPLOADS_DIR` - Uploaded images, served at `/uploads` (default: data/uploads)
//! - `STOREFRONT_STATIC_DIR` - Stylesheets and scripts (default: the crate's `static/`)
//! - `STOREFRONT_CATALOG_TTL_SECS` - How long a catalog snapshot is reused (default: 5)
//! - `STOREFRONT_CONTACT_NUMBER` - Phone/WhatsApp number shown in the cart (default: +963992766200)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CONTACT_NUMBER: &str = "+963992766200";
const DEFAULT_CATALOG_TTL_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the catalog JSON documents
    pub data_dir: PathBuf,
    /// Directory holding uploaded product and slide images
    pub uploads_dir: PathBuf,
    /// Directory holding CSS, JS and the placeholder image
    pub static_dir: PathBuf,
    /// Lifetime of a cached catalog snapshot
    pub catalog_ttl: Duration,
    /// Number visitors call or message to order
    pub contact_number: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;

        let data_dir = PathBuf::from(get_env_or_default("HARTNA_DATA_DIR", "data"));
        let uploads_dir = get_optional_env("HARTNA_UPLOADS_DIR")
            .map_or_else(|| data_dir.join("uploads"), PathBuf::from);
        let static_dir =
            get_optional_env("STOREFRONT_STATIC_DIR").map_or_else(default_static_dir, PathBuf::from);

        let ttl_secs = get_optional_env("STOREFRONT_CATALOG_TTL_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "STOREFRONT_CATALOG_TTL_SECS".to_string(),
                    e.to_string(),
                )
            })?
            .unwrap_or(DEFAULT_CATALOG_TTL_SECS);

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            uploads_dir,
            static_dir,
            catalog_ttl: Duration::from_secs(ttl_secs),
            contact_number: get_env_or_default(
                "STOREFRONT_CONTACT_NUMBER",
                DEFAULT_CONTACT_NUMBER,
            ),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Local configuration rooted at `data_dir`, with every other value at
    /// its default.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            uploads_dir: data_dir.join("uploads"),
            data_dir,
            static_dir: default_static_dir(),
            catalog_ttl: Duration::from_secs(DEFAULT_CATALOG_TTL_SECS),
            contact_number: DEFAULT_CONTACT_NUMBER.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Dialable form of the contact number (`+` becomes `00`).
    #[must_use]
    pub fn contact_tel(&self) -> String {
        self.contact_number
            .strip_prefix('+')
            .map_or_else(|| self.contact_number.clone(), |rest| format!("00{rest}"))
    }

    /// WhatsApp chat link for the contact number.
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self
            .contact_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!("https://wa.me/{digits}")
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::with_data_dir("data");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_uploads_default_under_data_dir() {
        let config = StorefrontConfig::with_data_dir("/srv/hartna");
        assert_eq!(config.uploads_dir, PathBuf::from("/srv/hartna/uploads"));
        assert!(!config.is_secure());
    }

    #[test]
    fn test_contact_links() {
        let config = StorefrontConfig::with_data_dir("data");
        assert_eq!(config.contact_tel(), "00963992766200");
        assert_eq!(config.whatsapp_url(), "https://wa.me/963992766200");
    }
}

//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_BASE_URL` - Public URL for the admin panel
//! - `ADMIN_PASSWORD_HASH` - Argon2 PHC hash of the admin password
//!   (generate with `hartna hash-password`)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_MAX_UPLOAD_BYTES` - Largest accepted image upload (default: 5 MiB)
//! - `ADMIN_STATIC_DIR` - Stylesheets and scripts (default: the crate's `static/`)
//! - `HARTNA_DATA_DIR` - Catalog data directory (default: data)
//! - `HARTNA_UPLOADS_DIR` - Uploaded images, served at `/uploads` (default: data/uploads)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use argon2::password_hash::PasswordHash;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default upload limit (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
///
/// Implements `Debug` manually to redact the password hash.
#[derive(Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Argon2 PHC string the login password is checked against
    pub password_hash: SecretString,
    /// Directory holding the catalog JSON documents
    pub data_dir: PathBuf,
    /// Directory uploaded images are written to
    pub uploads_dir: PathBuf,
    /// Directory holding CSS and JS
    pub static_dir: PathBuf,
    /// Largest accepted image upload in bytes
    pub max_upload_bytes: usize,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("password_hash", &"[REDACTED]")
            .field("data_dir", &self.data_dir)
            .field("uploads_dir", &self.uploads_dir)
            .field("static_dir", &self.static_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[SET]"))
            .field("sentry_environment", &self.sentry_environment)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("ADMIN_BASE_URL")?;
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("ADMIN_BASE_URL".to_string(), e.to_string())
        })?;

        let password_hash = get_required_env("ADMIN_PASSWORD_HASH")?;
        validate_password_hash(&password_hash)?;

        let max_upload_bytes = get_optional_env("ADMIN_MAX_UPLOAD_BYTES")
            .map(|v| v.parse::<usize>())
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ADMIN_MAX_UPLOAD_BYTES".to_string(), e.to_string())
            })?
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let data_dir = PathBuf::from(get_env_or_default("HARTNA_DATA_DIR", "data"));
        let uploads_dir = get_optional_env("HARTNA_UPLOADS_DIR")
            .map_or_else(|| data_dir.join("uploads"), PathBuf::from);
        let static_dir =
            get_optional_env("ADMIN_STATIC_DIR").map_or_else(default_static_dir, PathBuf::from);

        Ok(Self {
            host,
            port,
            base_url,
            password_hash: SecretString::from(password_hash),
            data_dir,
            uploads_dir,
            static_dir,
            max_upload_bytes,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Local configuration rooted at `data_dir` with the given password
    /// hash, every other value at its default.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>, password_hash: impl Into<String>) -> Self {
        let data_dir = data_dir.into();
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            password_hash: SecretString::from(password_hash.into()),
            uploads_dir: data_dir.join("uploads"),
            data_dir,
            static_dir: default_static_dir(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
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

    /// The configured password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        self.password_hash.expose_secret()
    }
}

fn validate_password_hash(hash: &str) -> Result<(), ConfigError> {
    PasswordHash::new(hash).map(|_| ()).map_err(|e| {
        ConfigError::InvalidEnvVar("ADMIN_PASSWORD_HASH".to_string(), e.to_string())
    })
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    get_optional_env(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

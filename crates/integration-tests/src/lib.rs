//! Integration tests for Hartna.
//!
//! [`TestContext`] serves the storefront and the admin panel on ephemeral
//! loopback ports, both pointed at one temporary data directory, the same
//! way the two binaries share `HARTNA_DATA_DIR` in production.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hartna-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use hartna_admin::config::AdminConfig;
use hartna_storefront::config::StorefrontConfig;
use reqwest::Client;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Admin password used by every test context.
pub const ADMIN_PASSWORD: &str = "integration-test-password";

/// Both servers running over a shared temporary data directory.
pub struct TestContext {
    pub storefront_url: String,
    pub admin_url: String,
    pub storefront: hartna_storefront::state::AppState,
    pub admin: hartna_admin::state::AppState,
    _data_dir: TempDir,
}

impl TestContext {
    /// Start both servers. The storefront catalog cache is disabled so
    /// admin edits show up on the next request.
    ///
    /// # Panics
    ///
    /// Panics if the temp dir, password hash or listeners cannot be created.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");

        let mut storefront_config = StorefrontConfig::with_data_dir(data_dir.path());
        storefront_config.catalog_ttl = Duration::ZERO;
        let storefront = hartna_storefront::state::AppState::new(storefront_config);

        let hash = hartna_admin::services::hash_password(ADMIN_PASSWORD)
            .expect("Failed to hash admin password");
        let admin = hartna_admin::state::AppState::new(AdminConfig::with_data_dir(
            data_dir.path(),
            hash,
        ));

        let storefront_url = spawn(hartna_storefront::app(storefront.clone())).await;
        let admin_url = spawn(hartna_admin::app(admin.clone())).await;

        Self {
            storefront_url,
            admin_url,
            storefront,
            admin,
            _data_dir: data_dir,
        }
    }

    /// A client with its own cookie jar.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// A client logged in to the admin panel.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails or is rejected.
    #[allow(clippy::expect_used)]
    pub async fn admin_client(&self) -> Client {
        let client = Self::client();
        let response = client
            .post(format!("{}/login", self.admin_url))
            .form(&[("password", ADMIN_PASSWORD)])
            .send()
            .await
            .expect("Failed to log in");
        assert!(response.status().is_success(), "login failed: {}", response.status());
        client
    }
}

/// Serve `app` on an ephemeral loopback port and return its base URL.
#[allow(clippy::expect_used)]
async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server error");
    });

    format!("http://{addr}")
}

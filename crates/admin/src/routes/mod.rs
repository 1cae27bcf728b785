//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Auth (single password, argon2 hash from config)
//! GET  /login                                     - Login page
//! POST /login                                     - Check password (rate limited)
//! POST /logout                                    - End session
//!
//! # Dashboard
//! GET  /                                          - Totals, catalog value, recent products
//!
//! # Products
//! GET  /products?query=                           - Product table with search
//! GET  /products/new                              - New product form
//! POST /products                                  - Create (multipart, optional image)
//! GET  /products/{id}/edit                        - Edit form
//! POST /products/{id}                             - Update (multipart, optional image)
//! POST /products/{id}/delete                      - Delete
//!
//! # Categories
//! GET  /categories                                - Categories with their subcategories
//! POST /categories                                - Create
//! POST /categories/{id}                           - Rename
//! POST /categories/{id}/delete                    - Delete
//! POST /categories/{id}/subcategories             - Add subcategory
//! POST /categories/{id}/subcategories/{sub}       - Rename subcategory
//! POST /categories/{id}/subcategories/{sub}/delete - Delete subcategory
//!
//! # Hero slider
//! GET  /hero-slider                               - Slides and the new slide form
//! POST /hero-slider                               - Create (multipart)
//! GET  /hero-slider/{id}/edit                     - Edit form
//! POST /hero-slider/{id}                          - Update (multipart)
//! POST /hero-slider/{id}/delete                   - Delete
//!
//! # Settings
//! GET  /settings                                  - Site settings form
//! POST /settings                                  - Save
//! POST /settings/reset                            - Restore defaults
//!
//! # Messages
//! GET  /messages                                  - Contact messages, newest first
//! POST /messages/{id}/delete                      - Delete
//! GET  /api/messages                              - Messages as JSON
//!
//! # Preferences
//! POST /preferences/language                      - Switch panel language
//! ```

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod hero;
pub mod messages;
pub mod preferences;
pub mod products;
pub mod settings;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};

use crate::error::Result;
use crate::middleware::login_rate_limiter;
use crate::state::AppState;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route(
            "/login",
            get(auth::login_page).merge(post(auth::login).layer(login_rate_limiter())),
        )
        .route("/logout", post(auth::logout))
        // Dashboard
        .route("/", get(dashboard::index))
        // Products
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/edit", get(products::edit))
        .route("/products/{id}/delete", post(products::delete))
        // Categories
        .route(
            "/categories",
            get(categories::index).post(categories::create),
        )
        .route("/categories/{id}", post(categories::update))
        .route("/categories/{id}/delete", post(categories::delete))
        .route(
            "/categories/{id}/subcategories",
            post(categories::add_subcategory),
        )
        .route(
            "/categories/{id}/subcategories/{sub}",
            post(categories::update_subcategory),
        )
        .route(
            "/categories/{id}/subcategories/{sub}/delete",
            post(categories::delete_subcategory),
        )
        // Hero slider
        .route("/hero-slider", get(hero::index).post(hero::create))
        .route("/hero-slider/{id}", post(hero::update))
        .route("/hero-slider/{id}/edit", get(hero::edit))
        .route("/hero-slider/{id}/delete", post(hero::delete))
        // Settings
        .route("/settings", get(settings::show).post(settings::update))
        .route("/settings/reset", post(settings::reset))
        // Messages
        .route("/messages", get(messages::index))
        .route("/messages/{id}/delete", post(messages::delete))
        .route("/api/messages", get(messages::api_index))
        // Preferences
        .route("/preferences/language", post(preferences::language))
}

/// Render a template into an HTML response.
pub(crate) fn render(template: &impl Template) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}

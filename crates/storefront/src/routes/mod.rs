//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                   - Home page (hero slider, featured products)
//! GET  /shop-now                           - All products
//! GET  /shop-machines                      - Coffee machines and their subcategories
//! GET  /about                              - About page
//!
//! # Products
//! GET  /products/{slug}                    - Category listing or product detail
//! GET  /products/{category}/{subcategory}  - Subcategory listing
//!
//! # Contact
//! GET  /contact                            - Contact page
//! POST /contact                            - Contact form submission (rate limited)
//! POST /api/messages                       - JSON contact submission (rate limited)
//!
//! # Cart (no checkout; orders are placed by phone)
//! GET  /cart                               - Cart page
//! POST /cart/add                           - Add a product
//! POST /cart/update                        - Change a line quantity
//! POST /cart/remove                        - Remove a line
//! GET  /cart/count                         - Cart count badge (fragment)
//!
//! # Preferences
//! POST /preferences/language               - Switch language
//! POST /preferences/theme                  - Switch theme
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod pages;
pub mod preferences;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::contact_rate_limiter;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(products::show))
        .route("/{category}/{subcategory}", get(products::subcategory))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the preference routes router.
pub fn preference_routes() -> Router<AppState> {
    Router::new()
        .route("/language", post(preferences::language))
        .route("/theme", post(preferences::theme))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/shop-now", get(pages::shop_now))
        .route("/shop-machines", get(pages::shop_machines))
        .route("/about", get(pages::about))
        .route(
            "/contact",
            get(contact::show).merge(post(contact::submit).layer(contact_rate_limiter())),
        )
        .route(
            "/api/messages",
            post(contact::submit_json).layer(contact_rate_limiter()),
        )
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/preferences", preference_routes())
        .fallback(pages::not_found)
}

//! Dashboard route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use hartna_core::I18n;
use tracing::instrument;

use super::products::ProductRow;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout};

/// Number of products shown under "recent products".
pub const RECENT_PRODUCTS: usize = 5;

/// Dashboard metrics, already localized for display.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub products: String,
    pub categories: String,
    pub slides: String,
    pub catalog_value: String,
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub metrics: DashboardMetrics,
    pub recent_products: Vec<ProductRow>,
}

/// Dashboard page handler.
#[instrument(skip(_admin, state, page))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>> {
    let catalog = state.store().snapshot().await?;
    let i18n = page.i18n;

    let metrics = DashboardMetrics {
        products: i18n.digits(&catalog.products.len().to_string()),
        categories: i18n.digits(&catalog.categories.len().to_string()),
        slides: i18n.digits(&catalog.hero_slides.len().to_string()),
        catalog_value: i18n.digits(&catalog.catalog_value().display()),
    };
    let recent_products = catalog
        .recent(RECENT_PRODUCTS)
        .iter()
        .map(|p| ProductRow::new(p, &catalog, i18n))
        .collect();

    render(&DashboardTemplate {
        i18n,
        layout: page.layout(&params),
        metrics,
        recent_products,
    })
}

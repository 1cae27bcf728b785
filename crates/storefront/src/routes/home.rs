//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use hartna_core::I18n;
use tracing::instrument;

use crate::filters;
use crate::page::{Layout, Page, ProductCard, SlideView};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub slides: Vec<SlideView>,
    /// Featured products.
    pub products: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip(page))]
pub async fn home(page: Page) -> impl IntoResponse {
    let language = page.language();
    let slides = page
        .catalog
        .hero_slides
        .iter()
        .map(|s| SlideView::new(s, language))
        .collect();

    HomeTemplate {
        i18n: page.i18n(),
        layout: page.layout(),
        slides,
        products: page.cards(page.catalog.featured()),
    }
}

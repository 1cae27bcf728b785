//! Shop, about and not-found page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hartna_core::{CategoryId, I18n};
use tracing::instrument;

use crate::filters;
use crate::page::{Layout, ListingHeader, Page};
use crate::routes::products::{FilterLink, ListingTemplate, category_filters};

/// Category shown on the machines shop page.
pub const MACHINES_CATEGORY: &str = "coffee-machines";

/// Number of machines shown on the machines shop page.
pub const MACHINES_LIMIT: usize = 8;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub i18n: I18n,
    pub layout: Layout,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub i18n: I18n,
    pub layout: Layout,
}

/// Render the not-found page with a 404 status.
pub(crate) fn not_found_page(page: &Page) -> (StatusCode, NotFoundTemplate) {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            i18n: page.i18n(),
            layout: page.layout(),
        },
    )
}

/// Display every product.
#[instrument(skip(page))]
pub async fn shop_now(page: Page) -> impl IntoResponse {
    let i18n = page.i18n();
    let language = page.language();

    let filters = std::iter::once(FilterLink {
        href: "/shop-now".to_owned(),
        name: i18n.t("allMachines").to_owned(),
        active: true,
    })
    .chain(page.catalog.categories.iter().map(|c| FilterLink {
        href: format!("/products/{}", c.id),
        name: c.localized_name(language).to_owned(),
        active: false,
    }))
    .collect();

    ListingTemplate {
        i18n,
        layout: page.layout(),
        title: i18n.t("shopNow").to_owned(),
        description: i18n.t("shopNowDesc").to_owned(),
        back: None,
        filters,
        products: page.cards(&page.catalog.products),
    }
}

/// Display the first coffee machines with links to each subcategory.
#[instrument(skip(page))]
pub async fn shop_machines(page: Page) -> impl IntoResponse {
    let i18n = page.i18n();
    let category = CategoryId::new(MACHINES_CATEGORY);
    let header = ListingHeader::for_category(&page.catalog, &category, page.language());

    ListingTemplate {
        i18n,
        layout: page.layout(),
        title: header.title.clone(),
        description: i18n.t("coffeeMachinesDesc").to_owned(),
        back: None,
        filters: category_filters(&header, i18n.t("allCoffeeMachines"), None),
        products: page.cards(page.catalog.in_category(&category).take(MACHINES_LIMIT)),
    }
}

/// Display the about page.
#[instrument(skip(page))]
pub async fn about(page: Page) -> impl IntoResponse {
    AboutTemplate {
        i18n: page.i18n(),
        layout: page.layout(),
    }
}

/// Fallback for unknown paths.
pub async fn not_found(page: Page) -> Response {
    not_found_page(&page).into_response()
}

//! Product and category route handlers.
//!
//! `/products/{slug}` serves a category listing when the slug names a
//! category and a product page when it names a product. Category ids win
//! when both match.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use hartna_core::models::catalog::RELATED_LIMIT;
use hartna_core::{CategoryId, I18n, Product, ProductId, SubcategoryId};
use tracing::instrument;

use crate::filters;
use crate::page::{Layout, ListingHeader, Page, ProductCard};
use crate::routes::pages::not_found_page;

/// A category, subcategory or shop link in a listing's filter bar.
#[derive(Debug, Clone)]
pub struct FilterLink {
    pub href: String,
    pub name: String,
    pub active: bool,
}

/// Back link shown above a listing title.
#[derive(Debug, Clone)]
pub struct BackLink {
    pub href: String,
    pub label: String,
}

/// Product listing template, shared by every grid page.
#[derive(Template, WebTemplate)]
#[template(path = "products/listing.html")]
pub struct ListingTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub title: String,
    pub description: String,
    pub back: Option<BackLink>,
    pub filters: Vec<FilterLink>,
    pub products: Vec<ProductCard>,
}

/// Product detail view.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub description: String,
    pub image: String,
    pub origin: String,
    pub category_href: String,
    pub category_name: String,
    pub subcategory_name: Option<String>,
    pub id: String,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub product: ProductView,
    /// Related products.
    pub products: Vec<ProductCard>,
}

/// Filter bar for a category: an "all" link followed by each subcategory.
pub(crate) fn category_filters(
    header: &ListingHeader,
    all_label: &str,
    active: Option<&str>,
) -> Vec<FilterLink> {
    std::iter::once(FilterLink {
        href: header.category_href.clone(),
        name: all_label.to_owned(),
        active: active.is_none(),
    })
    .chain(header.subcategories.iter().map(|s| FilterLink {
        active: active == Some(s.href.as_str()),
        href: s.href.clone(),
        name: s.name.clone(),
    }))
    .collect()
}

/// Display a category listing or a product page.
#[instrument(skip(page))]
pub async fn show(page: Page, Path(slug): Path<String>) -> Response {
    let category = CategoryId::new(slug.as_str());
    if page.catalog.category(&category).is_some() {
        return category_listing(&page, &category).into_response();
    }

    match page.catalog.product(&ProductId::new(slug)) {
        Some(product) => product_page(&page, product).into_response(),
        None => not_found_page(&page).into_response(),
    }
}

/// Display a subcategory listing.
#[instrument(skip(page))]
pub async fn subcategory(
    page: Page,
    Path((category, subcategory)): Path<(String, String)>,
) -> Response {
    let category = CategoryId::new(category);
    let subcategory = SubcategoryId::new(subcategory);
    if page.catalog.subcategory(&category, &subcategory).is_none() {
        return not_found_page(&page).into_response();
    }

    let i18n = page.i18n();
    let language = page.language();
    let header =
        ListingHeader::for_subcategory(&page.catalog, &category, &subcategory, language);
    let active = format!("/products/{category}/{subcategory}");

    ListingTemplate {
        i18n,
        layout: page.layout(),
        description: format!("{} {}", i18n.t("browseSelection"), header.title),
        back: Some(BackLink {
            href: header.category_href.clone(),
            label: format!("{} {}", i18n.t("backTo"), header.category_name),
        }),
        filters: category_filters(&header, i18n.t("allMachines"), Some(&active)),
        products: page.cards(page.catalog.in_subcategory(&category, &subcategory)),
        title: header.title,
    }
    .into_response()
}

fn category_listing(page: &Page, category: &CategoryId) -> ListingTemplate {
    let i18n = page.i18n();
    let header = ListingHeader::for_category(&page.catalog, category, page.language());

    ListingTemplate {
        i18n,
        layout: page.layout(),
        description: format!("{} {}", i18n.t("browseSelection"), header.title),
        back: None,
        filters: category_filters(&header, i18n.t("allMachines"), None),
        products: page.cards(page.catalog.in_category(category)),
        title: header.title,
    }
}

fn product_page(page: &Page, product: &Product) -> ProductTemplate {
    let i18n = page.i18n();
    let language = page.language();
    let catalog = &page.catalog;

    let view = ProductView {
        name: product.localized_name(language).to_owned(),
        description: product.localized_description(language).to_owned(),
        image: product.image_or_placeholder().to_owned(),
        origin: product
            .localized_origin(language)
            .unwrap_or_else(|| i18n.t("notAvailable"))
            .to_owned(),
        category_href: format!("/products/{}", product.category),
        category_name: catalog.category_name(&product.category, language),
        subcategory_name: product
            .subcategory
            .as_ref()
            .map(|s| catalog.subcategory_name(&product.category, s, language)),
        id: product.id.to_string(),
    };

    ProductTemplate {
        i18n,
        layout: page.layout(),
        product: view,
        products: page.cards(catalog.related(product, RELATED_LIMIT)),
    }
}

//! Product management route handlers.

use askama::Template;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use hartna_core::{
    Catalog, I18n, NewProduct, Product, ProductForm, ProductId, ProductUpdate,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::services::{MultipartForm, StagedImage, read_multipart};
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout, flash};

/// Product table row.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub category: String,
    pub featured: bool,
}

impl ProductRow {
    pub(crate) fn new(product: &Product, catalog: &Catalog, i18n: I18n) -> Self {
        let language = i18n.language();
        let mut category = catalog.category_name(&product.category, language);
        if let Some(sub) = &product.subcategory {
            category = format!(
                "{category} / {}",
                catalog.subcategory_name(&product.category, sub, language)
            );
        }

        Self {
            id: product.id.to_string(),
            name: product.localized_name(language).to_owned(),
            image: product.image_or_placeholder().to_owned(),
            price: i18n.digits(&product.price.display()),
            category,
            featured: product.featured,
        }
    }
}

/// Category choice in the product form, with its subcategories.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub subcategories: Vec<SubcategoryOption>,
}

#[derive(Debug, Clone)]
pub struct SubcategoryOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

fn category_options(catalog: &Catalog, form: &ProductForm, i18n: I18n) -> Vec<CategoryOption> {
    catalog
        .categories
        .iter()
        .map(|c| {
            let selected = c.id == form.category.as_str();
            CategoryOption {
                id: c.id.to_string(),
                name: c.localized_name(i18n.language()).to_owned(),
                selected,
                subcategories: c
                    .subcategories
                    .iter()
                    .map(|s| SubcategoryOption {
                        id: s.id.to_string(),
                        name: s.localized_name(i18n.language()).to_owned(),
                        selected: selected && s.id == form.subcategory.as_str(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub products: Vec<ProductRow>,
    pub query: String,
    pub total_label: String,
}

/// Product create/edit form template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    /// `None` for a new product.
    pub product_id: Option<String>,
    pub form: ProductForm,
    pub image_preview: Option<String>,
    pub categories: Vec<CategoryOption>,
}

impl ProductFormTemplate {
    fn action(&self) -> String {
        self.product_id
            .as_ref()
            .map_or_else(|| "/products".to_owned(), |id| format!("/products/{id}"))
    }
}

/// Build form input from multipart text fields.
fn product_form(fields: &MultipartForm) -> ProductForm {
    ProductForm {
        name: fields.text("name"),
        name_ar: fields.text("nameAr"),
        description: fields.text("description"),
        description_ar: fields.text("descriptionAr"),
        price: fields.text("price"),
        image: fields.text("image"),
        category: fields.text("category"),
        subcategory: fields.text("subcategory"),
        featured: fields.checked("featured"),
        product_origin: fields.text("productOrigin"),
        product_origin_ar: fields.text("productOriginAr"),
    }
}

/// Prefill the edit form from a stored product.
fn form_for(product: &Product) -> ProductForm {
    ProductForm {
        name: product.name.clone(),
        name_ar: product.name_ar.clone(),
        description: product.description.clone(),
        description_ar: product.description_ar.clone(),
        price: product.price.amount().normalize().to_string(),
        image: product.image.clone(),
        category: product.category.to_string(),
        subcategory: product
            .subcategory
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        featured: product.featured,
        product_origin: product.product_origin.clone().unwrap_or_default(),
        product_origin_ar: product.product_origin_ar.clone().unwrap_or_default(),
    }
}

/// Read the submitted form and stage its image.
///
/// The staged image path is written into the form so validation sees it.
async fn read_product_form(
    state: &AppState,
    multipart: Multipart,
) -> Result<(ProductForm, Option<StagedImage>)> {
    let config = state.config();
    let mut fields = read_multipart(multipart, config.max_upload_bytes).await?;
    let staged = fields
        .take_image()
        .map(|image| StagedImage::new(image, &config.uploads_dir))
        .transpose()?;

    let mut form = product_form(&fields);
    if let Some(staged) = &staged {
        staged.public_path().clone_into(&mut form.image);
    }
    Ok((form, staged))
}

async fn form_page(
    state: &AppState,
    page: &AdminPage,
    layout: Layout,
    product_id: Option<String>,
    form: ProductForm,
) -> Result<Html<String>> {
    let catalog = state.store().snapshot().await?;
    let image_preview = (!form.image.trim().is_empty()).then(|| form.image.clone());
    let categories = category_options(&catalog, &form, page.i18n);
    render(&ProductFormTemplate {
        i18n: page.i18n,
        layout,
        product_id,
        form,
        image_preview,
        categories,
    })
}

/// Products list page handler.
#[instrument(skip(_admin, state, page))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
    Query(search): Query<SearchQuery>,
) -> Result<Html<String>> {
    let catalog = state.store().snapshot().await?;
    let query = search.query.unwrap_or_default().trim().to_owned();

    let products: Vec<ProductRow> = if query.is_empty() {
        catalog
            .products
            .iter()
            .map(|p| ProductRow::new(p, &catalog, page.i18n))
            .collect()
    } else {
        catalog
            .search(&query)
            .into_iter()
            .map(|p| ProductRow::new(p, &catalog, page.i18n))
            .collect()
    };

    render(&ProductsIndexTemplate {
        i18n: page.i18n,
        layout: page.layout(&params),
        total_label: page.i18n.digits(&products.len().to_string()),
        products,
        query,
    })
}

/// New product form.
#[instrument(skip(_admin, state, page))]
pub async fn new(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
) -> Result<Html<String>> {
    let layout = page.layout(&FlashParams::default());
    form_page(&state, &page, layout, None, ProductForm::default()).await
}

/// Create a product.
///
/// Invalid input re-renders the form with 400 and the submitted values.
#[instrument(skip(_admin, state, page, multipart))]
pub async fn create(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    multipart: Multipart,
) -> Result<Response> {
    let (form, staged) = read_product_form(&state, multipart).await?;

    let product = match NewProduct::validate(&form) {
        Ok(product) => product,
        Err(e) => {
            let layout = page.layout_with_error(e.to_string());
            let html = form_page(&state, &page, layout, None, form).await?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    if let Some(staged) = staged {
        staged.persist().await?;
    }
    let product = state.store().add_product(product).await?;

    add_breadcrumb("catalog", &format!("Created product {}", product.id));
    tracing::info!(product_id = %product.id, "Product created");

    Ok(Redirect::to(&format!("/products?success={}", flash::SAVED)).into_response())
}

/// Edit product form.
#[instrument(skip(_admin, state, page))]
pub async fn edit(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let product = state
        .store()
        .product(&ProductId::new(id.as_str()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let layout = page.layout(&FlashParams::default());
    form_page(&state, &page, layout, Some(id), form_for(&product)).await
}

/// Update a product.
///
/// A blank price or image keeps the stored value.
#[instrument(skip(_admin, state, page, multipart))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response> {
    let product_id = ProductId::new(id.as_str());
    if state.store().product(&product_id).await?.is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    let (form, staged) = read_product_form(&state, multipart).await?;
    let update = match ProductUpdate::validate(&form) {
        Ok(update) => update,
        Err(e) => {
            let layout = page.layout_with_error(e.to_string());
            let html = form_page(&state, &page, layout, Some(id), form).await?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    if let Some(staged) = staged {
        staged.persist().await?;
    }
    if !state.store().update_product(&product_id, update).await? {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    add_breadcrumb("catalog", &format!("Updated product {id}"));
    tracing::info!(product_id = %id, "Product updated");

    Ok(Redirect::to(&format!("/products?success={}", flash::SAVED)).into_response())
}

/// Delete a product.
#[instrument(skip(_admin, state))]
pub async fn delete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    if !state.store().delete_product(&ProductId::new(id.as_str())).await? {
        return Ok(Redirect::to(&format!("/products?error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Deleted product {id}"));
    tracing::info!(product_id = %id, "Product deleted");
    Ok(Redirect::to(&format!("/products?success={}", flash::DELETED)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hartna_core::seed;

    use super::*;

    #[test]
    fn test_form_for_round_trips_through_validation() {
        let product = seed::default_products().into_iter().next().unwrap();
        let form = form_for(&product);
        assert!(!form.price.contains(','));

        let update = ProductUpdate::validate(&form).unwrap();
        let mut copy = product.clone();
        copy.apply(update);
        assert_eq!(copy, product);
    }

    #[test]
    fn test_product_row_names_subcategory() {
        let catalog = Catalog {
            products: seed::default_products(),
            categories: seed::default_categories(),
            hero_slides: Vec::new(),
            settings: hartna_core::SiteSettings::default(),
        };
        let product = catalog
            .products
            .iter()
            .find(|p| p.subcategory.is_some())
            .unwrap();
        let row = ProductRow::new(product, &catalog, I18n::default());
        assert!(row.category.contains(" / "));
        assert!(row.price.starts_with('$'));
    }
}

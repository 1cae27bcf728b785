//! Category and subcategory management.
//!
//! Everything happens on one page: each category row carries its rename,
//! delete and add-subcategory forms. Results come back as `?success=` /
//! `?error=` banners.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use hartna_core::{CategoryForm, CategoryId, CategoryUpdate, I18n, LocalizedName, SubcategoryId};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout, flash};

const INDEX: &str = "/categories";

/// Category row for templates.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub product_count: String,
    pub subcategories: Vec<SubcategoryView>,
}

#[derive(Debug, Clone)]
pub struct SubcategoryView {
    pub id: String,
    pub name: String,
    pub name_ar: String,
}

/// Categories page template.
#[derive(Template)]
#[template(path = "categories/index.html")]
pub struct CategoriesTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub categories: Vec<CategoryView>,
}

fn redirect(query: &str) -> Redirect {
    Redirect::to(&format!("{INDEX}?{query}"))
}

/// Categories page handler.
#[instrument(skip(_admin, state, page))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>> {
    let catalog = state.store().snapshot().await?;
    let i18n = page.i18n;

    let categories = catalog
        .categories
        .iter()
        .map(|c| CategoryView {
            id: c.id.to_string(),
            name: c.name.clone(),
            name_ar: c.name_ar.clone(),
            product_count: i18n.digits(&catalog.in_category(&c.id).count().to_string()),
            subcategories: c
                .subcategories
                .iter()
                .map(|s| SubcategoryView {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                    name_ar: s.name_ar.clone(),
                })
                .collect(),
        })
        .collect();

    render(&CategoriesTemplate {
        i18n,
        layout: page.layout(&params),
        categories,
    })
}

/// Create a category.
#[instrument(skip(_admin, state))]
pub async fn create(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let Ok(names) = LocalizedName::validate(&form) else {
        return Ok(redirect(&format!("error={}", flash::REQUIRED)));
    };

    let category = state.store().add_category(names).await?;
    add_breadcrumb("catalog", &format!("Created category {}", category.id));
    tracing::info!(category_id = %category.id, "Category created");
    Ok(redirect(&format!("success={}", flash::SAVED)))
}

/// Rename a category.
#[instrument(skip(_admin, state))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let Ok(names) = LocalizedName::validate(&form) else {
        return Ok(redirect(&format!("error={}", flash::REQUIRED)));
    };

    let updated = state
        .store()
        .update_category(&CategoryId::new(id.as_str()), CategoryUpdate::from(names))
        .await?;
    if !updated {
        return Ok(redirect(&format!("error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Updated category {id}"));
    tracing::info!(category_id = %id, "Category updated");
    Ok(redirect(&format!("success={}", flash::SAVED)))
}

/// Delete a category.
///
/// Products keep their category id; the storefront shows the humanized id
/// for categories that no longer exist.
#[instrument(skip(_admin, state))]
pub async fn delete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    if !state.store().delete_category(&CategoryId::new(id.as_str())).await? {
        return Ok(redirect(&format!("error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Deleted category {id}"));
    tracing::info!(category_id = %id, "Category deleted");
    Ok(redirect(&format!("success={}", flash::DELETED)))
}

/// Add a subcategory to a category.
#[instrument(skip(_admin, state))]
pub async fn add_subcategory(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let Ok(names) = LocalizedName::validate(&form) else {
        return Ok(redirect(&format!("error={}", flash::REQUIRED)));
    };

    let Some(subcategory) = state
        .store()
        .add_subcategory(&CategoryId::new(id.as_str()), names)
        .await?
    else {
        return Ok(redirect(&format!("error={}", flash::NOT_FOUND)));
    };

    add_breadcrumb("catalog", &format!("Created subcategory {}", subcategory.id));
    tracing::info!(category_id = %id, subcategory_id = %subcategory.id, "Subcategory created");
    Ok(redirect(&format!("success={}", flash::SAVED)))
}

/// Rename a subcategory.
#[instrument(skip(_admin, state))]
pub async fn update_subcategory(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path((id, sub)): Path<(String, String)>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let Ok(names) = LocalizedName::validate(&form) else {
        return Ok(redirect(&format!("error={}", flash::REQUIRED)));
    };

    let updated = state
        .store()
        .update_subcategory(
            &CategoryId::new(id.as_str()),
            &SubcategoryId::new(sub.as_str()),
            CategoryUpdate::from(names),
        )
        .await?;
    if !updated {
        return Ok(redirect(&format!("error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Updated subcategory {sub}"));
    tracing::info!(category_id = %id, subcategory_id = %sub, "Subcategory updated");
    Ok(redirect(&format!("success={}", flash::SAVED)))
}

/// Delete a subcategory.
#[instrument(skip(_admin, state))]
pub async fn delete_subcategory(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path((id, sub)): Path<(String, String)>,
) -> Result<Redirect> {
    let deleted = state
        .store()
        .delete_subcategory(
            &CategoryId::new(id.as_str()),
            &SubcategoryId::new(sub.as_str()),
        )
        .await?;
    if !deleted {
        return Ok(redirect(&format!("error={}", flash::NOT_FOUND)));
    }

    add_breadcrumb("catalog", &format!("Deleted subcategory {sub}"));
    tracing::info!(category_id = %id, subcategory_id = %sub, "Subcategory deleted");
    Ok(redirect(&format!("success={}", flash::DELETED)))
}

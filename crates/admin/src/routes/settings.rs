//! Site settings route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use hartna_core::{I18n, SettingsForm, SiteSettings, SiteSettingsUpdate};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::routes::render;
use crate::state::AppState;
use crate::views::{AdminPage, FlashParams, Layout, flash};

/// Settings page template.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub i18n: I18n,
    pub layout: Layout,
    pub form: SettingsForm,
}

fn form_for(settings: SiteSettings) -> SettingsForm {
    SettingsForm {
        site_name: settings.site_name,
        site_name_ar: settings.site_name_ar,
        tagline: settings.tagline,
        tagline_ar: settings.tagline_ar,
        phone: settings.phone,
        email: settings.email,
        address: settings.address,
        facebook: settings.facebook,
        instagram: settings.instagram,
        twitter: settings.twitter,
    }
}

/// Settings page handler.
#[instrument(skip(_admin, state, page))]
pub async fn show(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>> {
    let settings = state.store().settings().await?;
    render(&SettingsTemplate {
        i18n: page.i18n,
        layout: page.layout(&params),
        form: form_for(settings),
    })
}

/// Save settings.
///
/// An invalid email or social link re-renders the form with 400.
#[instrument(skip(_admin, state, page))]
pub async fn update(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    page: AdminPage,
    Form(form): Form<SettingsForm>,
) -> Result<Response> {
    let update = match SiteSettingsUpdate::validate(&form) {
        Ok(update) => update,
        Err(e) => {
            let template = SettingsTemplate {
                i18n: page.i18n,
                layout: page.layout_with_error(e.to_string()),
                form,
            };
            return Ok((StatusCode::BAD_REQUEST, render(&template)?).into_response());
        }
    };

    state.store().update_settings(update).await?;
    add_breadcrumb("settings", "Updated site settings");
    tracing::info!("Site settings updated");
    Ok(Redirect::to(&format!("/settings?success={}", flash::SAVED)).into_response())
}

/// Restore default settings.
#[instrument(skip(_admin, state))]
pub async fn reset(_admin: RequireAdminAuth, State(state): State<AppState>) -> Result<Redirect> {
    state.store().reset_settings().await?;
    add_breadcrumb("settings", "Reset site settings");
    tracing::info!("Site settings reset to defaults");
    Ok(Redirect::to(&format!("/settings?success={}", flash::RESET)))
}

//! Login and logout.

use askama::Template;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use hartna_core::I18n;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdminAuth, sign_in, sign_out};
use crate::routes::render;
use crate::services::auth::verify_password;
use crate::state::AppState;
use crate::views::AdminPage;

/// Login page template.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub i18n: I18n,
    pub error: Option<String>,
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Show the login form, or go to the dashboard when already signed in.
#[instrument(skip_all)]
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    page: AdminPage,
) -> Result<Response> {
    if admin.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(render(&LoginTemplate {
        i18n: page.i18n,
        error: None,
    })?
    .into_response())
}

/// Check the submitted password against the configured hash.
///
/// A wrong password re-renders the form with 401.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    page: AdminPage,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let hash = state.config().password_hash().to_owned();
    // Argon2 verification is CPU-bound
    let verified = tokio::task::spawn_blocking(move || verify_password(&form.password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("password check failed: {e}")))?;

    if verified.is_err() {
        tracing::warn!("Rejected admin login");
        let template = LoginTemplate {
            i18n: page.i18n,
            error: Some(page.i18n.t("invalidPassword").to_owned()),
        };
        return Ok((StatusCode::UNAUTHORIZED, render(&template)?).into_response());
    }

    let admin = sign_in(&session).await?;
    set_sentry_user(&admin.logged_in_at.to_rfc3339());
    tracing::info!("Admin signed in");

    Ok(Redirect::to("/").into_response())
}

/// Sign out and return to the login page.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    sign_out(&session).await?;
    clear_sentry_user();
    tracing::info!("Admin signed out");
    Ok(Redirect::to("/login"))
}

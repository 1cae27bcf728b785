//! Panel language switch.

use axum::{Form, response::Redirect};
use hartna_core::Language;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::session_keys;

/// Language switch form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Same-site path to return to, or the dashboard.
fn return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}

/// Switch the panel language.
#[instrument(skip(_admin, session))]
pub async fn language(
    _admin: RequireAdminAuth,
    session: Session,
    Form(form): Form<LanguageForm>,
) -> Result<Redirect> {
    let language = Language::parse(&form.language)
        .ok_or_else(|| AppError::BadRequest(format!("unknown language {}", form.language)))?;
    session.insert(session_keys::LANGUAGE, language).await?;
    Ok(Redirect::to(return_path(form.return_to.as_deref())))
}

//! Language and theme switch handlers.

use axum::{Form, response::Redirect};
use hartna_core::{Language, Theme};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{set_language, set_theme};

/// Language switch form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Theme switch form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Local path to send the visitor back to.
///
/// Anything that is not a same-site absolute path falls back to `default`.
#[must_use]
pub fn safe_return_to<'a>(return_to: Option<&'a str>, default: &'a str) -> &'a str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => default,
    }
}

/// Switch the visitor's language.
#[instrument(skip(session))]
pub async fn language(session: Session, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    let language = Language::parse(&form.language)
        .ok_or_else(|| AppError::BadRequest(format!("unknown language {}", form.language)))?;
    set_language(&session, language).await?;
    Ok(Redirect::to(safe_return_to(form.return_to.as_deref(), "/")))
}

/// Switch the visitor's theme.
#[instrument(skip(session))]
pub async fn theme(session: Session, Form(form): Form<ThemeForm>) -> Result<Redirect> {
    let theme = Theme::parse(&form.theme)
        .ok_or_else(|| AppError::BadRequest(format!("unknown theme {}", form.theme)))?;
    set_theme(&session, theme).await?;
    Ok(Redirect::to(safe_return_to(form.return_to.as_deref(), "/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_to() {
        assert_eq!(safe_return_to(Some("/products/6"), "/"), "/products/6");
        assert_eq!(safe_return_to(Some("/shop-now?x=1"), "/"), "/shop-now?x=1");
        assert_eq!(safe_return_to(Some("//evil.example"), "/"), "/");
        assert_eq!(safe_return_to(Some("https://evil.example"), "/cart"), "/cart");
        assert_eq!(safe_return_to(Some("/\\evil.example"), "/"), "/");
        assert_eq!(safe_return_to(None, "/cart"), "/cart");
    }
}

//! Shared page chrome for admin templates.
//!
//! Handlers take an [`AdminPage`] for the panel language and current path,
//! and turn `?success=` / `?error=` redirect codes into banner text with
//! [`AdminPage::layout`].

use axum::{extract::FromRequestParts, http::request::Parts};
use hartna_core::{I18n, Language};
use serde::Deserialize;
use tower_sessions::Session;

use crate::models::session_keys;

/// Redirect codes for result banners.
pub mod flash {
    pub const SAVED: &str = "saved";
    pub const DELETED: &str = "deleted";
    pub const RESET: &str = "reset";
    pub const NOT_FOUND: &str = "not_found";
    pub const REQUIRED: &str = "required";
}

/// Query parameters carrying a result banner after a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Navigation state and result banners for the base template.
#[derive(Debug, Clone)]
pub struct Layout {
    pub current_path: String,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Layout {
    /// Whether the sidebar entry for `prefix` should be highlighted.
    #[must_use]
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.current_path == "/"
        } else {
            self.current_path.starts_with(prefix)
        }
    }
}

/// Panel language and request path.
#[derive(Debug, Clone)]
pub struct AdminPage {
    pub i18n: I18n,
    pub current_path: String,
}

impl AdminPage {
    /// Layout with banners resolved from redirect codes.
    #[must_use]
    pub fn layout(&self, params: &FlashParams) -> Layout {
        let i18n = self.i18n;
        Layout {
            current_path: self.current_path.clone(),
            success: params.success.as_deref().map(|s| {
                match s {
                    flash::DELETED => i18n.t("deletedSuccessfully"),
                    _ => i18n.t("savedSuccessfully"),
                }
                .to_owned()
            }),
            error: params.error.as_deref().map(|e| {
                match e {
                    flash::NOT_FOUND => i18n.t("pageNotFound").to_owned(),
                    flash::REQUIRED => format!("{}: {}", i18n.t("name"), i18n.t("required")),
                    _ => i18n.t("somethingWentWrong").to_owned(),
                }
            }),
        }
    }

    /// Layout with an error banner and no success banner, for forms
    /// re-rendered after failed validation.
    #[must_use]
    pub fn layout_with_error(&self, error: impl Into<String>) -> Layout {
        Layout {
            current_path: self.current_path.clone(),
            success: None,
            error: Some(error.into()),
        }
    }
}

/// Read the panel language from a session, defaulting to English.
pub async fn session_language(session: &Session) -> Language {
    session
        .get::<Language>(session_keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for AdminPage
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let language = match parts.extensions.get::<Session>() {
            Some(session) => session_language(session).await,
            None => Language::default(),
        };

        Ok(Self {
            i18n: I18n::new(language),
            current_path: parts.uri.path().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str, language: Language) -> AdminPage {
        AdminPage {
            i18n: I18n::new(language),
            current_path: path.to_owned(),
        }
    }

    #[test]
    fn test_flash_codes_resolve_to_banners() {
        let params = FlashParams {
            success: Some(flash::DELETED.to_owned()),
            error: None,
        };
        let layout = page("/products", Language::En).layout(&params);
        assert_eq!(layout.success.as_deref(), Some("Deleted successfully"));
        assert!(layout.error.is_none());

        let params = FlashParams {
            success: None,
            error: Some("anything".to_owned()),
        };
        let layout = page("/products", Language::Ar).layout(&params);
        assert_eq!(layout.error.as_deref(), Some("حدث خطأ ما"));
    }

    #[test]
    fn test_active_navigation() {
        let layout = page("/products/3/edit", Language::En).layout(&FlashParams::default());
        assert!(layout.is_active("/products"));
        assert!(!layout.is_active("/"));
        assert!(page("/", Language::En).layout(&FlashParams::default()).is_active("/"));
    }
}

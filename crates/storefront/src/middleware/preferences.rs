//! Visitor language and theme preferences.

use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};
use hartna_core::{I18n, Language, Theme};
use tower_sessions::Session;

use super::session::session_keys;

/// Language and theme chosen by the visitor, read from the session.
///
/// Missing or unreadable values fall back to English and the system theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Read preferences from a session.
    pub async fn load(session: &Session) -> Self {
        let language = session
            .get::<Language>(session_keys::LANGUAGE)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();
        let theme = session
            .get::<Theme>(session_keys::THEME)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();
        Self { language, theme }
    }

    #[must_use]
    pub const fn i18n(self) -> I18n {
        I18n::new(self.language)
    }
}

/// Store the visitor's language.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn set_language(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LANGUAGE, language).await
}

/// Store the visitor's theme.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn set_theme(
    session: &Session,
    theme: Theme,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::THEME, theme).await
}

impl<S> FromRequestParts<S> for Preferences
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::load(&session).await)
    }
}

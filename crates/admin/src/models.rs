//! Session-stored admin state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker stored in the session once the password has been verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// When the password was accepted.
    pub logged_in_at: DateTime<Utc>,
}

impl CurrentAdmin {
    #[must_use]
    pub fn now() -> Self {
        Self {
            logged_in_at: Utc::now(),
        }
    }
}

/// Session keys for admin data.
pub mod session_keys {
    /// Key for the logged-in admin marker.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the panel language.
    pub const LANGUAGE: &str = "language";
}

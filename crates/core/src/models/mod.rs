//! Catalog domain models.
//!
//! Models serialize with the camelCase field names used by the persisted
//! JSON documents. Form types (`*Form`) carry raw user input and are turned
//! into validated values by their `validate` methods.

pub mod cart;
pub mod catalog;
pub mod category;
pub mod hero;
pub mod ids;
pub mod message;
pub mod product;
pub mod settings;

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use category::{Category, CategoryForm, CategoryUpdate, LocalizedName, Subcategory};
pub use hero::{HeroSlide, HeroSlideForm, HeroSlideUpdate, NewHeroSlide};
pub use message::{Message, MessageForm, NewMessage};
pub use product::{NewProduct, PLACEHOLDER_IMAGE, Product, ProductForm, ProductUpdate};
pub use settings::{SettingsForm, SiteSettings, SiteSettingsUpdate};

use crate::types::{EmailError, Language, PriceError};

/// Errors from validating user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{field} is required")]
    Required {
        /// Form field name.
        field: &'static str,
    },
    /// The price field could not be parsed.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
    /// An email field could not be parsed.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
    /// A URL field is not an absolute http(s) URL.
    #[error("{field} must be an absolute http(s) URL")]
    InvalidUrl {
        /// Form field name.
        field: &'static str,
    },
}

/// Trim `value` and fail with [`ValidationError::Required`] when blank.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_owned())
}

/// Trim `value`, mapping blank input to `None`.
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Choose the Arabic text when `language` is Arabic and it is not blank.
pub(crate) fn localized<'a>(language: Language, en: &'a str, ar: &'a str) -> &'a str {
    match language {
        Language::Ar if !ar.trim().is_empty() => ar,
        _ => en,
    }
}

//! Hartna Core - shared types, translations and catalog storage.
//!
//! This crate provides the domain used by every Hartna component:
//! - `storefront` - Public bilingual catalog site
//! - `admin` - Catalog administration panel
//! - `cli` - Command-line tools for seeding and maintenance
//!
//! # Architecture
//!
//! Everything outside [`store`] is pure: types, validation, catalog queries
//! and the translation dictionary. The file-backed key-value store lives
//! behind the `store` feature so the pure parts stay free of I/O.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, language and theme
//! - [`i18n`] - English/Arabic dictionary and numeral conversion
//! - [`models`] - Products, categories, hero slides, settings, messages, cart
//! - [`seed`] - Default catalog content
//! - [`store`] - Persistent catalog store (feature `store`)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod i18n;
pub mod models;
pub mod seed;
#[cfg(feature = "store")]
pub mod store;
pub mod types;

pub use i18n::I18n;
pub use models::*;
pub use types::*;

//! Persistent catalog storage.
//!
//! Each collection is one JSON document under a fixed key. Every read
//! loads the document from storage and every write replaces the whole
//! document, so separate processes sharing a data directory (storefront,
//! admin, CLI) see each other's changes without coordination.
//!
//! # Keys
//!
//! | Key | Contents |
//! |-----|----------|
//! | `hartna_products` | `Vec<Product>` |
//! | `hartna_categories` | `Vec<Category>` |
//! | `hartna_hero_slides` | `Vec<HeroSlide>` |
//! | `hartna_settings` | `SiteSettings` |
//! | `hartna_messages` | `Vec<Message>` |
//!
//! A key that has never been written reads as its default (seed content,
//! default settings, or no messages).

mod catalog;
mod storage;

pub use catalog::CatalogStore;
pub use storage::{FileStorage, MemoryStorage, Storage};

pub const PRODUCTS_KEY: &str = "hartna_products";
pub const CATEGORIES_KEY: &str = "hartna_categories";
pub const HERO_SLIDES_KEY: &str = "hartna_hero_slides";
pub const SETTINGS_KEY: &str = "hartna_settings";
pub const MESSAGES_KEY: &str = "hartna_messages";

/// Every collection key, in seeding order.
pub const ALL_KEYS: [&str; 5] = [
    PRODUCTS_KEY,
    CATEGORIES_KEY,
    HERO_SLIDES_KEY,
    SETTINGS_KEY,
    MESSAGES_KEY,
];

/// Errors from the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a document failed.
    #[error("storage I/O error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored document is not valid JSON for its collection.
    ///
    /// The document is left untouched so it can be repaired by hand.
    #[error("invalid JSON in {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

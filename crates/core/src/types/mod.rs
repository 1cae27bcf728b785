//! Core types for the Hartna catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod language;
pub mod price;
pub mod theme;

pub use email::{Email, EmailError};
pub use id::*;
pub use language::Language;
pub use price::{Price, PriceError};
pub use theme::Theme;

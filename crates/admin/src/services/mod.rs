//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Argon2 password hashing and verification for the admin login
//! - `uploads` - Multipart form parsing and product/slide image storage

pub mod auth;
pub mod uploads;

pub use auth::{AuthError, hash_password, verify_password};
pub use uploads::{MultipartForm, StagedImage, UploadError, read_multipart};

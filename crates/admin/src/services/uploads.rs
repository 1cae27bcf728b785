//! Multipart form parsing and image uploads.
//!
//! Product and hero slide forms are posted as `multipart/form-data` so an
//! image file can ride along with the text fields. The file is optional;
//! an image URL in the text fields works too. Accepted images are written
//! to the uploads directory under a random name and referenced as
//! `/uploads/<name>`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use thiserror::Error;
use uuid::Uuid;

/// Name of the file input in product and slide forms.
pub const IMAGE_FILE_FIELD: &str = "imageFile";

/// Errors from reading a multipart form or storing its image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request body is not a readable multipart form.
    #[error("invalid form data: {0}")]
    Multipart(#[from] MultipartError),

    /// The uploaded file is not a supported image type.
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    /// The uploaded file exceeds the configured limit.
    #[error("image is larger than {limit} bytes")]
    TooLarge { limit: usize },

    /// Writing the image failed.
    #[error("failed to store image: {0}")]
    Io(#[from] std::io::Error),
}

/// An image file received in a form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Text fields and the optional image of a submitted form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl MultipartForm {
    /// Value of a text field, empty when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Whether a checkbox field was ticked.
    #[must_use]
    pub fn checked(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|v| matches!(v.as_str(), "on" | "true" | "1"))
    }

    /// Take the uploaded image, if one was sent.
    pub fn take_image(&mut self) -> Option<UploadedImage> {
        self.image.take()
    }
}

/// Read every field of a multipart form.
///
/// A file input left empty is ignored. Images are checked for type and
/// size while streaming so an oversized upload is rejected without being
/// buffered whole.
///
/// # Errors
///
/// Returns `UploadError` if the body is malformed or the image is too large
/// or of an unsupported type.
pub async fn read_multipart(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<MultipartForm, UploadError> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name != IMAGE_FILE_FIELD {
            let value = field.text().await?;
            form.fields.insert(name, value);
            continue;
        }

        let has_file = field.file_name().is_some_and(|f| !f.is_empty());
        if !has_file {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_owned();
        extension_for(&content_type)
            .ok_or_else(|| UploadError::UnsupportedType(content_type.clone()))?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        if !bytes.is_empty() {
            form.image = Some(UploadedImage {
                content_type,
                bytes,
            });
        }
    }

    Ok(form)
}

/// File extension for an accepted image content type.
///
/// SVG is not accepted since uploads are served from the admin origin.
#[must_use]
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// An image with its final name chosen but not yet written.
///
/// Forms are validated against [`StagedImage::public_path`] before the file
/// is persisted, so a rejected form leaves nothing behind.
#[derive(Debug)]
pub struct StagedImage {
    public_path: String,
    file_path: PathBuf,
    bytes: Vec<u8>,
}

impl StagedImage {
    /// Pick a random file name for `image` inside `uploads_dir`.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::UnsupportedType` if the content type is not an
    /// accepted image type.
    pub fn new(image: UploadedImage, uploads_dir: &Path) -> Result<Self, UploadError> {
        let extension = extension_for(&image.content_type)
            .ok_or_else(|| UploadError::UnsupportedType(image.content_type.clone()))?;
        let file_name = format!("{}.{extension}", Uuid::new_v4());

        Ok(Self {
            public_path: format!("/uploads/{file_name}"),
            file_path: uploads_dir.join(file_name),
            bytes: image.bytes,
        })
    }

    /// URL path the image will be served under.
    #[must_use]
    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// Write the image, creating the uploads directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the file cannot be written.
    pub async fn persist(self) -> Result<String, UploadError> {
        if let Some(dir) = self.file_path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&self.file_path, &self.bytes).await?;
        tracing::info!(path = %self.public_path, bytes = self.bytes.len(), "Stored uploaded image");
        Ok(self.public_path)
    }
}

//! Verification request value object and its validating constructor.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use fg_shared::utils::validation::{normalize_username, validators};

/// Maximum accepted image payload size (5 MiB, exclusive)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum username length after trimming
pub const MIN_USERNAME_CHARS: usize = 3;

/// Accepted image formats for face verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    /// Map a MIME type onto an accepted format
    ///
    /// `image/jpg` is accepted as an alias of `image/jpeg`; browsers and
    /// older tooling still emit it.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    /// Canonical MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// File extension used when naming the multipart upload
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
        }
    }
}

/// A raw image payload as received from the capture/picker layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Binary image data
    pub bytes: Vec<u8>,
    /// MIME type reported by the source
    pub mime_type: String,
}

impl ImageUpload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Payload size in bytes
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A validated verification request ready for submission
///
/// A request is never constructed from an invalid image or a bad username;
/// construction fails closed. The username carried here is already
/// normalized (trimmed, lower-cased) and must not be normalized again
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    username: String,
    image: ImageUpload,
    format: ImageFormat,
}

impl VerificationRequest {
    /// Build a verification request from a claimed username and an image
    ///
    /// # Errors
    ///
    /// * `ValidationError::EmptyUsername` - username is empty after trimming
    /// * `ValidationError::UsernameTooShort` - fewer than 3 characters after trimming
    /// * `ValidationError::UnsupportedImageType` - MIME type outside {jpeg, jpg, png, gif}
    /// * `ValidationError::ImageTooLarge` - payload size at or above 5 MiB
    pub fn build(username: &str, image: ImageUpload) -> Result<Self, ValidationError> {
        if !validators::not_empty(username) {
            return Err(ValidationError::EmptyUsername);
        }
        if !validators::length_at_least(username, MIN_USERNAME_CHARS) {
            return Err(ValidationError::UsernameTooShort {
                min: MIN_USERNAME_CHARS,
            });
        }
        let format = ImageFormat::from_mime(&image.mime_type).ok_or_else(|| {
            ValidationError::UnsupportedImageType {
                mime_type: image.mime_type.clone(),
            }
        })?;
        // The 5 MiB boundary itself is rejected; only strictly smaller
        // payloads pass.
        if image.size_bytes() >= MAX_IMAGE_BYTES {
            return Err(ValidationError::ImageTooLarge {
                size_bytes: image.size_bytes(),
                max_bytes: MAX_IMAGE_BYTES,
            });
        }

        Ok(Self {
            username: normalize_username(username),
            image,
            format,
        })
    }

    /// The normalized (trimmed, lower-cased) username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The image payload, byte-for-byte as supplied
    pub fn image(&self) -> &ImageUpload {
        &self.image
    }

    /// The resolved image format
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

//! # Profile Image Intake
//!
//! Uploaded pictures are embedded inline as base64 data URIs. There is no
//! upload endpoint. A policy decides whether an upload is accepted.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::ImageError;

/// Ceiling applied by the size-limited policy
pub const DEFAULT_IMAGE_LIMIT: u64 = 5 * 1024 * 1024;

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Acceptance rules for profile images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePolicy {
    /// Maximum accepted size in bytes; `None` accepts any size
    pub max_bytes: Option<u64>,
}

impl ImagePolicy {
    pub fn size_limited() -> Self {
        Self {
            max_bytes: Some(DEFAULT_IMAGE_LIMIT),
        }
    }

    pub fn unlimited() -> Self {
        Self { max_bytes: None }
    }

    pub fn check(&self, upload: &ImageUpload) -> Result<(), ImageError> {
        if !upload.mime_type.starts_with("image/") {
            return Err(ImageError::NotAnImage(upload.mime_type.clone()));
        }

        if let Some(limit) = self.max_bytes {
            if upload.size() > limit {
                return Err(ImageError::TooLarge {
                    size: upload.size(),
                    limit,
                });
            }
        }

        if upload.bytes.is_empty() {
            return Err(ImageError::Empty);
        }

        Ok(())
    }

    /// Validate the upload and encode it as a `data:` URI
    pub fn to_data_uri(&self, upload: &ImageUpload) -> Result<String, ImageError> {
        self.check(upload)?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(&upload.bytes);
        Ok(format!("data:{};base64,{}", upload.mime_type, encoded))
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::unlimited()
    }
}

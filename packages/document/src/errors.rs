//! Error types for the document model

use thiserror::Error;

/// Reasons a profile image upload is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Image size should be less than {}MB", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    #[error("Error reading file")]
    Empty,
}

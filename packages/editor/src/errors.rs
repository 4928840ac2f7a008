//! Error types for the editor

use resume_document::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid command payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Command error: {0}")]
    Command(#[from] crate::commands::CommandError),

    #[error("Image rejected: {0}")]
    Image(#[from] ImageError),
}

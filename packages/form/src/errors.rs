use thiserror::Error;

/// A required or malformed input, addressed by its field path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{path} is required")]
    Required { path: String },

    #[error("{path} is not a valid date: {value:?}")]
    InvalidDate { path: String, value: String },
}

impl FieldError {
    /// Path such as `fullName` or `experience[0].company`
    pub fn path(&self) -> &str {
        match self {
            FieldError::Required { path } | FieldError::InvalidDate { path, .. } => path,
        }
    }
}

pub mod apply;
pub mod export;
pub mod init;
pub mod preview;

pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};

use anyhow::{Context, Result};
use resume_document::Document;
use std::path::{Path, PathBuf};

/// Resolve `path` against the working directory
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

pub(crate) fn read_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read document {}", path.display()))?;
    Document::from_json(&content).with_context(|| format!("Invalid document {}", path.display()))
}

/// Millisecond timestamp used to seed item ids
pub(crate) fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

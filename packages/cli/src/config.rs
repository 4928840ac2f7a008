use resume_document::ImagePolicy;
use resume_editor::{EditorOptions, DEFAULT_DEBOUNCE_MS};
use resume_export::ExportProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "resume.config.json";
pub const DEFAULT_DOCUMENT_NAME: &str = "resume.json";

/// `resume.config.json` file format. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Maximum undo snapshots (0 = unlimited)
    pub history_limit: usize,

    /// Quiet interval before style edits are committed
    pub style_debounce_ms: u64,

    /// Profile image ceiling in bytes (null = unlimited)
    pub image_size_limit: Option<u64>,

    pub export: ExportProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: 0,
            style_debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_size_limit: None,
            export: ExportProfile::editor(),
        }
    }
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        Self::load_from(&PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME))
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            history_limit: self.history_limit,
            style_debounce_ms: self.style_debounce_ms,
            image_policy: ImagePolicy {
                max_bytes: self.image_size_limit,
            },
        }
    }
}

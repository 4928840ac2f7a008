use serde::{Deserialize, Serialize};

/// How the downloaded file is named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileNaming {
    /// Always `resume.pdf`
    #[default]
    Fixed,
    /// `<Full_Name>_Resume.pdf`
    FullName,
}

impl FileNaming {
    pub fn file_name(&self, full_name: &str) -> String {
        let stem: Vec<&str> = full_name.split_whitespace().collect();
        match self {
            FileNaming::FullName if !stem.is_empty() => format!("{}_Resume.pdf", stem.join("_")),
            _ => "resume.pdf".to_string(),
        }
    }
}

/// Export settings for one of the two flows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportProfile {
    /// Device pixels per CSS pixel when rasterizing
    pub scale: f32,
    /// Blank margin above the image
    pub top_offset_mm: f32,
    pub file_name: FileNaming,
}

impl ExportProfile {
    /// WYSIWYG editor flow
    pub fn editor() -> Self {
        Self {
            scale: 2.0,
            top_offset_mm: 30.0,
            file_name: FileNaming::Fixed,
        }
    }

    /// Structured form flow
    pub fn form() -> Self {
        Self {
            scale: 5.0,
            top_offset_mm: 0.0,
            file_name: FileNaming::FullName,
        }
    }
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self::editor()
    }
}

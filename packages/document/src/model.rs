//! # Resume Document Model
//!
//! A document is an ordered list of sections. Each section holds an ordered
//! list of content items. Every value here is plain owned data: editing
//! produces a new document rather than mutating a shared one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::style::StyleAttributes;

/// Root resume document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub sections: Vec<Section>,
    pub theme: Theme,
    /// Profile picture as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub profile_image_position: ImagePosition,
}

/// Document-wide colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            accent_color: "#0ea5e9".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Center,
    Right,
}

impl ImagePosition {
    /// Flexbox justification for the image row
    pub fn as_css(&self) -> &'static str {
        match self {
            ImagePosition::Left => "flex-start",
            ImagePosition::Center => "center",
            ImagePosition::Right => "flex-end",
        }
    }
}

/// Category tag of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Social,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Personal => "personal",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Social => "social",
            SectionKind::Custom => "custom",
        }
    }

    /// Name with the first letter upper-cased ("experience" -> "Experience")
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Only dated sections show a date line in the preview
    pub fn shows_dates(&self) -> bool {
        matches!(self, SectionKind::Experience | SectionKind::Education)
    }
}

/// Titled, categorized group of content items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: Vec<ContentItem>,
    pub heading_style: StyleAttributes,
}

impl Section {
    /// Empty section as created by the "add section" command
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            title: format!("New {} Section", kind.display_name()),
            kind,
            content: Vec::new(),
            heading_style: StyleAttributes::heading(),
        }
    }

    pub fn find_item(&self, item_id: &str) -> Option<&ContentItem> {
        self.content.iter().find(|item| item.id == item_id)
    }

    pub fn item_index(&self, item_id: &str) -> Option<usize> {
        self.content.iter().position(|item| item.id == item_id)
    }
}

/// One entry within a section (a job, a degree, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub subheading: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub title_style: StyleAttributes,
    pub subheading_style: StyleAttributes,
    pub details_style: StyleAttributes,
    pub date_style: StyleAttributes,
}

impl ContentItem {
    /// Item with the given texts, no dates and default styles
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subheading: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subheading: subheading.into(),
            details: details.into(),
            start_date: None,
            end_date: None,
            title_style: StyleAttributes::body(),
            subheading_style: StyleAttributes::body(),
            details_style: StyleAttributes::body(),
            date_style: StyleAttributes::body(),
        }
    }

    /// Blank entry as created by the "add item" command
    pub fn blank(id: impl Into<String>, kind: SectionKind) -> Self {
        Self::new(id, format!("New {} Entry", kind.display_name()), "", "")
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}

impl Document {
    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.id == section_id)
    }

    pub fn find_item(&self, section_id: &str, item_id: &str) -> Option<&ContentItem> {
        self.find_section(section_id)
            .and_then(|section| section.find_item(item_id))
    }

    /// Whether any section or item carries `id`
    pub fn uses_id(&self, id: &str) -> bool {
        self.sections.iter().any(|section| {
            section.id == id || section.content.iter().any(|item| item.id == id)
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

//! # Style Attributes
//!
//! Independently overridable formatting attached to every text region of a
//! resume: section headings and the four text slots of a content item.

use serde::{Deserialize, Serialize};

/// Discrete font sizes offered by the style controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "12px")]
    Px12,
    #[serde(rename = "14px")]
    Px14,
    #[serde(rename = "16px")]
    Px16,
    #[serde(rename = "18px")]
    Px18,
    #[serde(rename = "20px")]
    Px20,
    #[serde(rename = "24px")]
    Px24,
}

impl FontSize {
    pub const ALL: [FontSize; 6] = [
        FontSize::Px12,
        FontSize::Px14,
        FontSize::Px16,
        FontSize::Px18,
        FontSize::Px20,
        FontSize::Px24,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            FontSize::Px12 => "12px",
            FontSize::Px14 => "14px",
            FontSize::Px16 => "16px",
            FontSize::Px18 => "18px",
            FontSize::Px20 => "20px",
            FontSize::Px24 => "24px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    None,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl FontStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
        }
    }
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Formatting of one text region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
    /// Hex color, stored as entered
    pub color: String,
}

impl StyleAttributes {
    /// Body text style used by content items
    pub fn body() -> Self {
        Self {
            font_size: FontSize::Px14,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            text_decoration: TextDecoration::None,
            text_align: TextAlign::Left,
            color: "#000000".to_string(),
        }
    }

    /// Heading style used by section titles
    pub fn heading() -> Self {
        Self {
            font_size: FontSize::Px20,
            font_weight: FontWeight::Bold,
            ..Self::body()
        }
    }

    /// Return a copy with every field set in `patch` overridden
    pub fn patched(&self, patch: &StylePatch) -> Self {
        Self {
            font_size: patch.font_size.unwrap_or(self.font_size),
            font_weight: patch.font_weight.unwrap_or(self.font_weight),
            font_style: patch.font_style.unwrap_or(self.font_style),
            text_decoration: patch.text_decoration.unwrap_or(self.text_decoration),
            text_align: patch.text_align.unwrap_or(self.text_align),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
        }
    }

    /// Inline CSS declarations, in a fixed property order
    pub fn to_css(&self) -> String {
        format!(
            "font-size: {}; font-weight: {}; font-style: {}; text-decoration: {}; text-align: {}; color: {}",
            self.font_size.as_css(),
            self.font_weight.as_css(),
            self.font_style.as_css(),
            self.text_decoration.as_css(),
            self.text_align.as_css(),
            self.color,
        )
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self::body()
    }
}

/// Partial style update produced by a single toggle or picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Fold a newer patch into this one; fields set by `newer` win
    pub fn merge(&mut self, newer: StylePatch) {
        if newer.font_size.is_some() {
            self.font_size = newer.font_size;
        }
        if newer.font_weight.is_some() {
            self.font_weight = newer.font_weight;
        }
        if newer.font_style.is_some() {
            self.font_style = newer.font_style;
        }
        if newer.text_decoration.is_some() {
            self.text_decoration = newer.text_decoration;
        }
        if newer.text_align.is_some() {
            self.text_align = newer.text_align;
        }
        if newer.color.is_some() {
            self.color = newer.color;
        }
    }

    pub fn bold(on: bool) -> Self {
        Self {
            font_weight: Some(if on { FontWeight::Bold } else { FontWeight::Normal }),
            ..Self::default()
        }
    }

    pub fn italic(on: bool) -> Self {
        Self {
            font_style: Some(if on { FontStyle::Italic } else { FontStyle::Normal }),
            ..Self::default()
        }
    }

    pub fn underline(on: bool) -> Self {
        Self {
            text_decoration: Some(if on {
                TextDecoration::Underline
            } else {
                TextDecoration::None
            }),
            ..Self::default()
        }
    }

    pub fn align(align: TextAlign) -> Self {
        Self {
            text_align: Some(align),
            ..Self::default()
        }
    }

    pub fn size(size: FontSize) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_differs_from_body_only_in_size_and_weight() {
        let heading = StyleAttributes::heading();
        let body = StyleAttributes::body();

        assert_eq!(heading.font_size, FontSize::Px20);
        assert_eq!(heading.font_weight, FontWeight::Bold);
        assert_eq!(heading.color, body.color);
        assert_eq!(heading.text_align, body.text_align);
    }

    #[test]
    fn test_patch_overrides_only_set_fields() {
        let style = StyleAttributes::body();
        let patched = style.patched(&StylePatch::bold(true));

        assert_eq!(patched.font_weight, FontWeight::Bold);
        assert_eq!(patched.font_size, style.font_size);
        assert_eq!(patched.color, style.color);
    }

    #[test]
    fn test_merge_keeps_earlier_fields() {
        let mut patch = StylePatch::bold(true);
        patch.merge(StylePatch::italic(true));
        patch.merge(StylePatch::bold(false));

        assert_eq!(patch.font_weight, Some(FontWeight::Normal));
        assert_eq!(patch.font_style, Some(FontStyle::Italic));
        assert!(patch.color.is_none());
    }

    #[test]
    fn test_css_uses_wire_values() {
        let css = StyleAttributes::heading().to_css();
        assert!(css.contains("font-size: 20px"));
        assert!(css.contains("font-weight: bold"));
        assert!(css.contains("text-decoration: none"));
        assert!(css.contains("color: #000000"));
    }

    #[test]
    fn test_font_size_serializes_as_css_value() {
        let json = serde_json::to_string(&FontSize::Px18).unwrap();
        assert_eq!(json, "\"18px\"");
    }
}

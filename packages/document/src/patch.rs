//! Partial updates for sections and content items.
//!
//! A patch names only the fields it changes. Applying it returns a new value;
//! the original is left untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{ContentItem, Section, SectionKind};
use crate::style::StyleAttributes;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_style: Option<StyleAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentItem>>,
}

impl SectionPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn heading_style(style: StyleAttributes) -> Self {
        Self {
            heading_style: Some(style),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, section: &Section) -> Section {
        Section {
            id: section.id.clone(),
            title: self.title.clone().unwrap_or_else(|| section.title.clone()),
            kind: self.kind.unwrap_or(section.kind),
            content: self
                .content
                .clone()
                .unwrap_or_else(|| section.content.clone()),
            heading_style: self
                .heading_style
                .clone()
                .unwrap_or_else(|| section.heading_style.clone()),
        }
    }
}

/// Field-by-field update of a content item.
///
/// Date fields distinguish "leave alone" (absent) from "clear" (`null`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<StyleAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading_style: Option<StyleAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_style: Option<StyleAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_style: Option<StyleAttributes>,
}

/// A field that is present in the input, even as `null`, becomes `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn details(details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::default()
        }
    }

    pub fn dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, item: &ContentItem) -> ContentItem {
        fn pick<T: Clone>(patch: &Option<T>, current: &T) -> T {
            patch.clone().unwrap_or_else(|| current.clone())
        }

        ContentItem {
            id: item.id.clone(),
            title: pick(&self.title, &item.title),
            subheading: pick(&self.subheading, &item.subheading),
            details: pick(&self.details, &item.details),
            start_date: self.start_date.unwrap_or(item.start_date),
            end_date: self.end_date.unwrap_or(item.end_date),
            title_style: pick(&self.title_style, &item.title_style),
            subheading_style: pick(&self.subheading_style, &item.subheading_style),
            details_style: pick(&self.details_style, &item.details_style),
            date_style: pick(&self.date_style, &item.date_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ContentItem {
        ContentItem::new("1", "Engineer", "Acme", "Built things").with_dates(
            NaiveDate::from_ymd_opt(2020, 1, 1),
            NaiveDate::from_ymd_opt(2022, 3, 1),
        )
    }

    #[test]
    fn test_item_patch_leaves_unset_fields() {
        let patched = ItemPatch::title("Staff Engineer").apply_to(&item());

        assert_eq!(patched.title, "Staff Engineer");
        assert_eq!(patched.subheading, "Acme");
        assert_eq!(patched.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn test_null_date_clears_but_missing_date_keeps() {
        let patch: ItemPatch = serde_json::from_str(r#"{ "endDate": null }"#).unwrap();
        assert_eq!(patch.end_date, Some(None));
        assert_eq!(patch.start_date, None);

        let patched = patch.apply_to(&item());
        assert!(patched.end_date.is_none());
        assert!(patched.start_date.is_some());
    }

    #[test]
    fn test_section_patch_keeps_id() {
        let section = Section::new("7", SectionKind::Custom);
        let patched = SectionPatch::title("Projects").apply_to(&section);

        assert_eq!(patched.id, "7");
        assert_eq!(patched.title, "Projects");
        assert_eq!(patched.kind, SectionKind::Custom);
    }
}

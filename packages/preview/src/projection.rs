//! Stateless projection of a document into what the preview shows.

use resume_document::{format_date_range, Document, ImagePosition, SectionKind, Theme};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    pub theme: Theme,
    pub profile_image: Option<String>,
    pub image_position: ImagePosition,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub heading_css: String,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub title_css: String,
    /// Present only when non-empty
    pub subheading: Option<String>,
    pub subheading_css: String,
    pub details: String,
    pub details_css: String,
    /// Only for experience and education sections
    pub date_text: Option<String>,
    pub date_css: String,
}

pub fn project(document: &Document) -> PreviewModel {
    let sections = document
        .sections
        .iter()
        .map(|section| {
            let items = section
                .content
                .iter()
                .map(|item| ItemView {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    title_css: item.title_style.to_css(),
                    subheading: (!item.subheading.is_empty()).then(|| item.subheading.clone()),
                    subheading_css: item.subheading_style.to_css(),
                    details: item.details.clone(),
                    details_css: item.details_style.to_css(),
                    date_text: if section.kind.shows_dates() {
                        format_date_range(item.start_date, item.end_date)
                    } else {
                        None
                    },
                    date_css: item.date_style.to_css(),
                })
                .collect();

            SectionView {
                id: section.id.clone(),
                title: section.title.clone(),
                kind: section.kind,
                heading_css: section.heading_style.to_css(),
                items,
            }
        })
        .collect();

    PreviewModel {
        theme: document.theme.clone(),
        profile_image: document.profile_image.clone(),
        image_position: document.profile_image_position,
        sections,
    }
}

//! Seed template loaded when the editor starts.

use chrono::NaiveDate;

use crate::model::{ContentItem, Document, ImagePosition, Section, SectionKind, Theme};
use crate::style::StyleAttributes;

fn section(id: &str, title: &str, kind: SectionKind, item: ContentItem) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        content: vec![item],
        heading_style: StyleAttributes::heading(),
    }
}

impl Document {
    /// Five-section starter resume; the work experience entry runs until `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let sections = vec![
            section(
                "1",
                "Personal Information",
                SectionKind::Personal,
                ContentItem::new(
                    "1",
                    "Contact",
                    "",
                    "Your Name\nEmail: your.email@example.com\nPhone: (123) 456-7890\nLocation: Your City, State",
                ),
            ),
            section(
                "2",
                "Professional Summary",
                SectionKind::Summary,
                ContentItem::new(
                    "1",
                    "",
                    "",
                    "Your professional summary goes here. Highlight your key skills and experiences.",
                ),
            ),
            section(
                "3",
                "Work Experience",
                SectionKind::Experience,
                ContentItem::new(
                    "1",
                    "Job Title",
                    "Company Name",
                    "• Responsibility or achievement\n• Another responsibility or achievement\n• One more key point about your role",
                )
                .with_dates(NaiveDate::from_ymd_opt(2020, 1, 1), Some(today)),
            ),
            section(
                "4",
                "Education",
                SectionKind::Education,
                ContentItem::new(
                    "1",
                    "Degree Name",
                    "University Name",
                    "Relevant coursework or achievements",
                )
                .with_dates(
                    NaiveDate::from_ymd_opt(2016, 9, 1),
                    NaiveDate::from_ymd_opt(2020, 6, 1),
                ),
            ),
            section(
                "5",
                "Skills",
                SectionKind::Skills,
                ContentItem::new("1", "Skills", "", "• Skill 1\n• Skill 2\n• Skill 3\n• Skill 4"),
            ),
        ];

        Self {
            sections,
            theme: Theme::default(),
            profile_image: None,
            profile_image_position: ImagePosition::Left,
        }
    }
}

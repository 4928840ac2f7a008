//! JSON interchange tests for the document model

use resume_document::{Document, ImagePosition, NaiveDate, SectionKind};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_seeded_document_survives_json() {
    let doc = Document::seeded(today());

    let json = doc.to_json().unwrap();
    let restored = Document::from_json(&json).unwrap();

    assert_eq!(doc, restored);
}

#[test]
fn test_json_uses_camel_case_and_iso_dates() {
    let doc = Document::seeded(today());
    let value = serde_json::to_value(&doc).unwrap();

    let item = &value["sections"][3]["content"][0];
    assert_eq!(item["startDate"], "2016-09-01");
    assert_eq!(item["titleStyle"]["fontSize"], "14px");
    assert_eq!(value["profileImagePosition"], "left");
    assert!(value.get("profileImage").is_none());
}

#[test]
fn test_missing_optional_fields_default() {
    let json = r##"{
        "sections": [{
            "id": "a",
            "title": "Links",
            "type": "social",
            "content": [],
            "headingStyle": {
                "fontSize": "20px",
                "fontWeight": "bold",
                "fontStyle": "normal",
                "textDecoration": "none",
                "textAlign": "left",
                "color": "#000000"
            }
        }],
        "theme": {
            "backgroundColor": "#ffffff",
            "textColor": "#000000",
            "accentColor": "#0ea5e9"
        }
    }"##;

    let doc = Document::from_json(json).unwrap();
    assert_eq!(doc.sections[0].kind, SectionKind::Social);
    assert_eq!(doc.profile_image_position, ImagePosition::Left);
    assert!(doc.profile_image.is_none());
}

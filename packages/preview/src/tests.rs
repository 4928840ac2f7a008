use crate::{project, render_document, render_static, RenderOptions};
use resume_document::{ContentItem, Document, ImagePosition, NaiveDate, Section, SectionKind, StylePatch};
use resume_editor::{Editor, ItemStyleField, StyleTarget};
use resume_form::{EducationField, ExperienceField, ListField, ResumeForm, TextField};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn date(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

#[test]
fn test_project_seeded_document() {
    let doc = Document::seeded(today());
    let model = project(&doc);

    assert_eq!(model.sections.len(), 5);
    let experience = &model.sections[2].items[0];
    assert_eq!(experience.date_text.as_deref(), Some("January 2020 - June 2024"));

    // personal information never shows dates
    assert!(model.sections[0].items.iter().all(|i| i.date_text.is_none()));
    assert!(model.sections[0].heading_css.contains("font-weight: bold"));
}

#[test]
fn test_dates_hidden_outside_experience_and_education() {
    let mut section = Section::new("s", SectionKind::Custom);
    section
        .content
        .push(ContentItem::new("i", "Compiler", "", "").with_dates(Some(date(2021, 3)), None));
    let mut doc = Document::seeded(today());
    doc.sections.push(section);

    let model = project(&doc);
    let item = &model.sections[5].items[0];
    assert!(item.date_text.is_none());
    assert!(item.subheading.is_none());
}

#[test]
fn test_start_only_range_has_no_dangling_dash() {
    let mut doc = Document::seeded(today());
    doc.sections[3].content[0].end_date = None;

    let model = project(&doc);
    assert_eq!(model.sections[3].items[0].date_text.as_deref(), Some("September 2016"));
}

#[test]
fn test_render_document_structure() {
    let html = render_document(&Document::seeded(today()), RenderOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<div id=\"resume-preview\""));
    assert!(html.contains("data-section-id=\"3\""));
    assert!(html.contains("white-space: pre-wrap"));
    assert!(html.contains("January 2020 - June 2024"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_render_document_escapes_text() {
    let mut editor = Editor::seeded(today(), 0);
    let item = editor.add_item("5").unwrap();
    editor.update_item("5", &item, resume_document::ItemPatch::title("<script>&\"x\""));

    let html = render_document(editor.document(), RenderOptions::compact());
    assert!(html.contains("&lt;script&gt;&amp;&quot;x&quot;"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("</p>\n"));
}

#[test]
fn test_render_document_reflects_committed_styles() {
    let mut editor = Editor::seeded(today(), 0);
    let target = StyleTarget::Item {
        section_id: "3".to_string(),
        item_id: "1".to_string(),
        field: ItemStyleField::Title,
    };
    editor.queue_style_change(target, StylePatch::bold(true), 0);
    editor.flush_all_styles();

    let model = project(editor.document());
    assert!(model.sections[2].items[0].title_css.contains("font-weight: bold"));
}

#[test]
fn test_render_document_image_position() {
    let mut doc = Document::seeded(today());
    doc.profile_image = Some("data:image/png;base64,AAAA".to_string());
    doc.profile_image_position = ImagePosition::Right;

    let html = render_document(&doc, RenderOptions::default());
    assert!(html.contains("justify-content: flex-end"));
    assert!(html.contains("src=\"data:image/png;base64,AAAA\""));
}

fn submitted_form() -> ResumeForm {
    let mut form = ResumeForm::new();
    form.set_text(TextField::FullName, "Jane Doe");
    form.set_text(TextField::Email, "jane@example.com");
    form.set_text(TextField::GithubLink, "https://github.com/jane");
    form.set_experience(0, ExperienceField::Position, "Engineer");
    form.set_experience(0, ExperienceField::Company, "Initech");
    form.set_experience(0, ExperienceField::StartDate, "2020-01-01");
    form.set_experience(0, ExperienceField::Description, "Built things\nFixed things");
    form.set_education(0, EducationField::Degree, "BSc");
    form.set_education(0, EducationField::Institution, "State University");
    form.set_education(0, EducationField::StartDate, "2016-09-01");
    form.set_education(0, EducationField::EndDate, "2020-06-01");
    form.set_list_entry(ListField::Skills, 0, "Rust");
    form.add_list_entry(ListField::Skills);
    form
}

#[test]
fn test_render_static() {
    let resume = submitted_form().submit().unwrap();
    let html = render_static(&resume, RenderOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<div id=\"resume\">"));
    assert!(html.contains("Jan 2020 - Present"));
    assert!(html.contains("Sep 2016 - Jun 2020"));
    assert!(html.contains("<li>Built things</li>"));
    assert!(html.contains("<li>Fixed things</li>"));
    assert_eq!(html.matches("class=\"chip\"").count(), 1);
    assert!(html.contains("GitHub Profile"));
    assert!(!html.contains("LinkedIn Profile"));
    assert!(!html.contains("Certifications"));
    assert!(!html.contains("Professional Summary"));
}

#[test]
fn test_render_static_skips_non_web_links() {
    let mut form = submitted_form();
    form.set_text(TextField::LinkedinLink, "javascript:alert(1)");
    form.set_text(TextField::PortfolioLink, "HTTPS://jane.dev");
    let resume = form.submit().unwrap();
    let html = render_static(&resume, RenderOptions::default());

    assert!(!html.contains("javascript:"));
    assert!(!html.contains("LinkedIn Profile"));
    assert!(html.contains("href=\"https://github.com/jane\""));
    assert!(html.contains("href=\"HTTPS://jane.dev\""));

    let mut form = submitted_form();
    form.set_text(TextField::GithubLink, "data:text/html,hi");
    let html = render_static(&form.submit().unwrap(), RenderOptions::default());
    assert!(!html.contains("<footer"));
}

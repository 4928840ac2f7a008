//! Integration tests for the structured form flow

use resume_form::{EducationField, ExperienceField, FieldError, ListField, ResumeForm, TextField};

fn paths(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(FieldError::path).collect()
}

#[test]
fn test_empty_form_reports_every_required_field() {
    let mut form = ResumeForm::new();
    let errors = form.submit().unwrap_err();

    assert_eq!(
        paths(&errors),
        vec![
            "fullName",
            "email",
            "experience[0].position",
            "experience[0].company",
            "experience[0].startDate",
            "experience[0].description",
            "education[0].degree",
            "education[0].institution",
            "education[0].startDate",
            "education[0].endDate",
        ]
    );
    assert!(form.error_for("email").is_some());
    assert!(form.error_for("experience[0].endDate").is_none());
}

#[test]
fn test_second_row_errors_use_its_index() {
    let mut form = filled_form();
    form.add_experience();
    form.set_experience(1, ExperienceField::Position, "Lead");

    let errors = form.submit().unwrap_err();
    assert_eq!(
        paths(&errors),
        vec![
            "experience[1].company",
            "experience[1].startDate",
            "experience[1].description",
        ]
    );
}

#[test]
fn test_submit_filters_blank_entries_and_clears_errors() -> anyhow::Result<()> {
    let mut form = ResumeForm::new();
    assert!(form.submit().is_err());

    let mut form_ok = filled_form();
    form_ok.add_list_entry(ListField::Skills);
    form_ok.set_list_entry(ListField::Skills, 0, "Rust");
    form_ok.set_text(TextField::Summary, "   ");

    let resume = form_ok.submit().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    assert_eq!(resume.skills, vec!["Rust".to_string()]);
    assert!(resume.certifications.is_empty());
    assert!(resume.summary.is_none());
    assert!(form_ok.errors().is_empty());
    Ok(())
}

fn filled_form() -> ResumeForm {
    let mut form = ResumeForm::new();
    form.set_text(TextField::FullName, "Grace Hopper");
    form.set_text(TextField::Email, "grace@example.com");
    form.set_experience(0, ExperienceField::Position, "Rear Admiral");
    form.set_experience(0, ExperienceField::Company, "US Navy");
    form.set_experience(0, ExperienceField::StartDate, "1943-12-01");
    form.set_experience(0, ExperienceField::Description, "Led the compiler team");
    form.set_education(0, EducationField::Degree, "PhD Mathematics");
    form.set_education(0, EducationField::Institution, "Yale");
    form.set_education(0, EducationField::StartDate, "1930-09-01");
    form.set_education(0, EducationField::EndDate, "1934-06-01");
    form
}

//! Form session: edits to the raw data plus the picked profile image.

use resume_document::{ImageError, ImagePolicy, ImageUpload};

use crate::data::{EducationField, ExperienceField, ListField, ResumeData, TextField};
use crate::errors::FieldError;
use crate::submitted::SubmittedResume;

/// Drop `index` from `list` unless it is the last remaining entry
fn remove_keeping_one<T>(list: &mut Vec<T>, index: usize) -> bool {
    if list.len() <= 1 || index >= list.len() {
        return false;
    }
    list.remove(index);
    true
}

#[derive(Debug, Clone)]
pub struct ResumeForm {
    data: ResumeData,
    profile_image: Option<String>,
    image_error: Option<String>,
    image_policy: ImagePolicy,
    errors: Vec<FieldError>,
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeForm {
    pub fn new() -> Self {
        Self::with_data(ResumeData::default())
    }

    pub fn with_data(data: ResumeData) -> Self {
        Self {
            data,
            profile_image: None,
            image_error: None,
            image_policy: ImagePolicy::size_limited(),
            errors: Vec::new(),
        }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *self.data.text_mut(field) = value.into();
    }

    pub fn set_experience(&mut self, index: usize, field: ExperienceField, value: impl Into<String>) -> bool {
        match self.data.experience.get_mut(index) {
            Some(exp) => {
                *exp.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_education(&mut self, index: usize, field: EducationField, value: impl Into<String>) -> bool {
        match self.data.education.get_mut(index) {
            Some(edu) => {
                *edu.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_experience(&mut self) {
        self.data.experience.push(Default::default());
    }

    pub fn remove_experience(&mut self, index: usize) -> bool {
        remove_keeping_one(&mut self.data.experience, index)
    }

    pub fn add_education(&mut self) {
        self.data.education.push(Default::default());
    }

    pub fn remove_education(&mut self, index: usize) -> bool {
        remove_keeping_one(&mut self.data.education, index)
    }

    pub fn add_list_entry(&mut self, field: ListField) {
        self.data.list_mut(field).push(String::new());
    }

    pub fn set_list_entry(&mut self, field: ListField, index: usize, value: impl Into<String>) -> bool {
        match self.data.list_mut(field).get_mut(index) {
            Some(entry) => {
                *entry = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_list_entry(&mut self, field: ListField, index: usize) -> bool {
        remove_keeping_one(self.data.list_mut(field), index)
    }

    /// Accept a picture under the size ceiling. A rejection keeps the
    /// previous picture and sets the inline error.
    pub fn upload_image(&mut self, upload: &ImageUpload) -> Result<(), ImageError> {
        match self.image_policy.to_data_uri(upload) {
            Ok(data_uri) => {
                self.profile_image = Some(data_uri);
                self.image_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(file = %upload.file_name, size = upload.size(), %err, "image rejected");
                self.image_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.profile_image = None;
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn image_error(&self) -> Option<&str> {
        self.image_error.as_deref()
    }

    /// Field errors from the last `submit`
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path() == path)
    }

    pub fn submit(&mut self) -> Result<SubmittedResume, Vec<FieldError>> {
        let result = SubmittedResume::from_data(&self.data, self.profile_image.as_deref());
        match &result {
            Ok(_) => self.errors.clear(),
            Err(errors) => {
                tracing::debug!(count = errors.len(), "form submission rejected");
                self.errors = errors.clone();
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_never_drops_last_entry() {
        let mut form = ResumeForm::new();
        assert!(!form.remove_experience(0));
        assert!(!form.remove_list_entry(ListField::Skills, 0));

        form.add_experience();
        assert!(form.remove_experience(1));
        assert_eq!(form.data().experience.len(), 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut form = ResumeForm::new();
        form.add_education();

        assert!(!form.remove_education(7));
        assert!(!form.set_list_entry(ListField::Languages, 3, "Basque"));
        assert!(!form.set_experience(2, ExperienceField::Company, "Acme"));
        assert_eq!(form.data().education.len(), 2);
    }

    #[test]
    fn test_list_entries() {
        let mut form = ResumeForm::new();
        form.set_list_entry(ListField::Skills, 0, "Rust");
        form.add_list_entry(ListField::Skills);
        form.set_list_entry(ListField::Skills, 1, "SQL");
        assert!(form.remove_list_entry(ListField::Skills, 0));
        assert_eq!(form.data().skills, vec!["SQL".to_string()]);
    }

    #[test]
    fn test_rejected_upload_keeps_previous_image() {
        let mut form = ResumeForm::new();
        form.upload_image(&ImageUpload::new("a.png", "image/png", vec![1, 2]))
            .unwrap();
        let before = form.profile_image().map(str::to_string);

        let big = ImageUpload::new("b.png", "image/png", vec![0; 5 * 1024 * 1024 + 1]);
        assert!(form.upload_image(&big).is_err());
        assert_eq!(form.image_error(), Some("Image size should be less than 5MB"));
        assert_eq!(form.profile_image().map(str::to_string), before);

        form.upload_image(&ImageUpload::new("c.png", "image/png", vec![3]))
            .unwrap();
        assert!(form.image_error().is_none());
    }
}

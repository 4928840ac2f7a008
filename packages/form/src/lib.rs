//! # Resume Form
//!
//! The structured-form flow: fill in a fixed set of fields, submit, and
//! get a validated resume ready for the static preview.
//!
//! ```text
//! ResumeForm (ResumeData + image) ──submit()──► SubmittedResume
//!                                      │
//!                                      └──► Vec<FieldError> (inline)
//! ```

mod data;
mod errors;
mod form;
mod submitted;

pub use data::{Education, EducationField, Experience, ExperienceField, ListField, ResumeData, TextField};
pub use errors::FieldError;
pub use form::ResumeForm;
pub use submitted::{SubmittedEducation, SubmittedExperience, SubmittedResume};

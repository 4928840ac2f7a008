//! Raw form state, exactly as typed by the user.
//!
//! Dates are kept as the `YYYY-MM-DD` strings produced by a date input.
//! They are parsed on submit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub github_link: String,
    pub linkedin_link: String,
    pub portfolio_link: String,
}

impl Default for ResumeData {
    /// One empty row in every repeated group
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            address: String::new(),
            phone_number: String::new(),
            summary: String::new(),
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            skills: vec![String::new()],
            certifications: vec![String::new()],
            languages: vec![String::new()],
            github_link: String::new(),
            linkedin_link: String::new(),
            portfolio_link: String::new(),
        }
    }
}

impl ResumeData {
    pub fn list(&self, field: ListField) -> &Vec<String> {
        match field {
            ListField::Skills => &self.skills,
            ListField::Certifications => &self.certifications,
            ListField::Languages => &self.languages,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Skills => &mut self.skills,
            ListField::Certifications => &mut self.certifications,
            ListField::Languages => &mut self.languages,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Email => &mut self.email,
            TextField::Address => &mut self.address,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::Summary => &mut self.summary,
            TextField::GithubLink => &mut self.github_link,
            TextField::LinkedinLink => &mut self.linkedin_link,
            TextField::PortfolioLink => &mut self.portfolio_link,
        }
    }
}

/// Single-value inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    FullName,
    Email,
    Address,
    PhoneNumber,
    Summary,
    GithubLink,
    LinkedinLink,
    PortfolioLink,
}

/// Repeated plain-text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Skills,
    Certifications,
    Languages,
}

impl ListField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListField::Skills => "skills",
            ListField::Certifications => "certifications",
            ListField::Languages => "languages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Position,
    Company,
    StartDate,
    EndDate,
    Description,
}

impl Experience {
    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Position => &mut self.position,
            ExperienceField::Company => &mut self.company,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    StartDate,
    EndDate,
}

impl Education {
    pub fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Institution => &mut self.institution,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
        }
    }
}

//! Validated resume handed to the static preview.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::{Education, Experience, ResumeData};
use crate::errors::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedExperience {
    pub position: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl SubmittedExperience {
    /// Description bullets, one per non-blank line
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedEducation {
    pub degree: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResume {
    pub full_name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub summary: Option<String>,
    pub experience: Vec<SubmittedExperience>,
    pub education: Vec<SubmittedEducation>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
    pub profile_image: Option<String>,
}

/// Collects every problem in one pass instead of stopping at the first
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required(&mut self, path: String, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.errors.push(FieldError::Required { path });
        }
        value.to_string()
    }

    fn date(&mut self, path: String, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors.push(FieldError::InvalidDate {
                    path,
                    value: value.to_string(),
                });
                None
            }
        }
    }

    fn required_date(&mut self, path: String, value: &str) -> Option<NaiveDate> {
        if value.trim().is_empty() {
            self.errors.push(FieldError::Required { path });
            return None;
        }
        self.date(path, value)
    }

    fn experience(&mut self, index: usize, exp: &Experience) -> Option<SubmittedExperience> {
        let path = |field: &str| format!("experience[{}].{}", index, field);

        let position = self.required(path("position"), &exp.position);
        let company = self.required(path("company"), &exp.company);
        let start_date = self.required_date(path("startDate"), &exp.start_date);
        let end_date = self.date(path("endDate"), &exp.end_date);
        let description = self.required(path("description"), &exp.description);

        Some(SubmittedExperience {
            position,
            company,
            start_date: start_date?,
            end_date,
            description,
        })
    }

    fn education(&mut self, index: usize, edu: &Education) -> Option<SubmittedEducation> {
        let path = |field: &str| format!("education[{}].{}", index, field);

        let degree = self.required(path("degree"), &edu.degree);
        let institution = self.required(path("institution"), &edu.institution);
        let start_date = self.required_date(path("startDate"), &edu.start_date);
        let end_date = self.required_date(path("endDate"), &edu.end_date);

        Some(SubmittedEducation {
            degree,
            institution,
            start_date: start_date?,
            end_date: end_date?,
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn entries(list: &[String]) -> Vec<String> {
    list.iter().filter_map(|entry| optional(entry)).collect()
}

impl SubmittedResume {
    /// Validate raw form data. All missing or malformed fields are reported.
    pub fn from_data(data: &ResumeData, profile_image: Option<&str>) -> Result<Self, Vec<FieldError>> {
        let mut checker = Checker::default();

        let full_name = checker.required("fullName".to_string(), &data.full_name);
        let email = checker.required("email".to_string(), &data.email);

        let experience: Vec<_> = data
            .experience
            .iter()
            .enumerate()
            .map(|(i, exp)| checker.experience(i, exp))
            .collect();
        let education: Vec<_> = data
            .education
            .iter()
            .enumerate()
            .map(|(i, edu)| checker.education(i, edu))
            .collect();

        if !checker.errors.is_empty() {
            return Err(checker.errors);
        }

        Ok(Self {
            full_name,
            email,
            address: optional(&data.address),
            phone_number: optional(&data.phone_number),
            summary: optional(&data.summary),
            experience: experience.into_iter().flatten().collect(),
            education: education.into_iter().flatten().collect(),
            skills: entries(&data.skills),
            certifications: entries(&data.certifications),
            languages: entries(&data.languages),
            github_link: optional(&data.github_link),
            linkedin_link: optional(&data.linkedin_link),
            portfolio_link: optional(&data.portfolio_link),
            profile_image: profile_image.and_then(optional),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ResumeData {
        let mut data = ResumeData::default();
        data.full_name = "Ada  Lovelace".to_string();
        data.email = "ada@example.com".to_string();
        data.experience[0] = Experience {
            position: "Analyst".to_string(),
            company: "Engines Ltd".to_string(),
            start_date: "2020-01-15".to_string(),
            end_date: String::new(),
            description: "Wrote programs\n\nDebugged looms".to_string(),
        };
        data.education[0] = Education {
            degree: "Mathematics".to_string(),
            institution: "Home".to_string(),
            start_date: "2010-09-01".to_string(),
            end_date: "2014-06-01".to_string(),
        };
        data
    }

    #[test]
    fn test_valid_submission() {
        let resume = SubmittedResume::from_data(&filled(), None).unwrap();

        assert_eq!(resume.full_name, "Ada  Lovelace");
        assert_eq!(resume.experience[0].end_date, None);
        assert_eq!(resume.experience[0].start_date, NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        assert!(resume.address.is_none());
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_description_lines_skip_blank() {
        let resume = SubmittedResume::from_data(&filled(), None).unwrap();
        let lines: Vec<_> = resume.experience[0].description_lines().collect();
        assert_eq!(lines, vec!["Wrote programs", "Debugged looms"]);
    }

    #[test]
    fn test_blank_description_is_required() {
        let mut data = filled();
        data.experience[0].description = " \n ".to_string();

        let errors = SubmittedResume::from_data(&data, None).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::Required {
                path: "experience[0].description".to_string(),
            }]
        );
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let mut data = filled();
        data.education[0].end_date = "June".to_string();

        let errors = SubmittedResume::from_data(&data, None).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::InvalidDate {
                path: "education[0].endDate".to_string(),
                value: "June".to_string(),
            }]
        );
    }
}

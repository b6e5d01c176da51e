use serde::{Deserialize, Serialize};

use crate::matching::model::{CandidateProfile, ExperienceEvidence, ProjectEvidence};
use crate::models::nullable::null_as_default;

/// Structured resume as returned by the resume parser.
/// Shape is loose on purpose: the LLM may omit or null any field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experiences: Vec<ResumeExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ResumeProject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeExperience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    /// `None` for a current position.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
}

impl ParsedResume {
    /// Projects the resume onto the fields the fit scorer reads.
    pub fn to_profile(&self) -> CandidateProfile {
        CandidateProfile {
            skills: self.skills.clone(),
            experiences: self
                .experiences
                .iter()
                .map(|e| ExperienceEvidence {
                    description: e.description.clone(),
                    achievements: e.achievements.clone(),
                    technologies: e.technologies.clone(),
                })
                .collect(),
            projects: self
                .projects
                .iter()
                .map(|p| ProjectEvidence {
                    technologies: p.technologies.clone(),
                    highlights: p.highlights.clone(),
                })
                .collect(),
        }
    }

    /// Name to show on the page, falling back to a neutral placeholder.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Candidate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_llm_output_deserializes() {
        let json = r#"{
            "full_name": "Ada Lovelace",
            "skills": ["Rust", "Python"],
            "experiences": [
                {
                    "company": "Analytical Engines Ltd",
                    "title": "Engineer",
                    "description": "Wrote the first program",
                    "achievements": null
                }
            ],
            "projects": null
        }"#;
        let resume: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.display_name(), "Ada Lovelace");
        assert_eq!(resume.experiences.len(), 1);
        assert!(resume.experiences[0].achievements.is_empty());
        assert!(resume.experiences[0].technologies.is_empty());
        assert!(resume.experiences[0].end_date.is_none());
        assert!(resume.projects.is_empty());
        assert!(resume.education.is_empty());
    }

    #[test]
    fn test_to_profile_carries_scoring_fields() {
        let resume = ParsedResume {
            skills: vec!["Rust".to_string()],
            experiences: vec![ResumeExperience {
                company: "Acme".to_string(),
                title: "SRE".to_string(),
                description: "Ran the fleet".to_string(),
                achievements: vec!["Cut paging by 60%".to_string()],
                technologies: vec!["Kubernetes".to_string()],
                ..ResumeExperience::default()
            }],
            projects: vec![ResumeProject {
                name: "blog".to_string(),
                technologies: vec!["Hugo".to_string()],
                highlights: vec!["10k monthly readers".to_string()],
                ..ResumeProject::default()
            }],
            ..ParsedResume::default()
        };

        let profile = resume.to_profile();
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert_eq!(profile.experiences[0].description, "Ran the fleet");
        assert_eq!(
            profile.experiences[0].technologies,
            vec!["Kubernetes".to_string()]
        );
        assert_eq!(
            profile.projects[0].highlights,
            vec!["10k monthly readers".to_string()]
        );
    }

    #[test]
    fn test_display_name_falls_back() {
        let resume = ParsedResume {
            full_name: Some("   ".to_string()),
            ..ParsedResume::default()
        };
        assert_eq!(resume.display_name(), "Candidate");
        assert_eq!(ParsedResume::default().display_name(), "Candidate");
    }
}

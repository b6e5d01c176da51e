use serde::{Deserialize, Serialize};

use crate::matching::model::RequirementSet;
use crate::models::nullable::null_as_default;

/// Structured job description as returned by the job parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJob {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// "junior" | "mid" | "senior" | "staff" | "principal" | "director" | "unknown"
    #[serde(default)]
    pub seniority: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_problems: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_values: Vec<String>,
}

impl ParsedJob {
    /// Projects the job onto the fields the fit scorer reads.
    pub fn to_requirements(&self) -> RequirementSet {
        RequirementSet {
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
            responsibilities: self.responsibilities.clone(),
            business_problems: self.business_problems.clone(),
        }
    }

    pub fn company_name(&self) -> &str {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("the company")
    }

    pub fn role_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("the role")
    }
}

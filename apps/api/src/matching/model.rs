//! Input and output types for the fit scorer.
//!
//! Every sequence field tolerates `null` or absence on the wire and becomes empty,
//! so the scorer itself never deals with "maybe missing" data.

use serde::{Deserialize, Serialize};

use crate::models::nullable::null_as_default;

/// A single work experience as seen by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEvidence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

/// A side project or portfolio item as seen by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvidence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

/// Everything the scorer knows about a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experiences: Vec<ExperienceEvidence>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEvidence>,
}

/// Everything the scorer knows about a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_problems: Vec<String>,
}

/// Sub-scores and skill partition behind a fit score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills_match: u32,       // 0 – 100
    pub experience_match: u32,   // 0 – 100
    pub requirements_match: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required_skills: usize,
    pub total_matched_skills: usize,
}

/// Final output of the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub breakdown: MatchBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_null_fields_deserializes() {
        let json = r#"{
            "skills": ["Rust"],
            "experiences": [
                {"description": "Built things", "achievements": null, "technologies": null}
            ],
            "projects": null
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert!(profile.experiences[0].achievements.is_empty());
        assert!(profile.experiences[0].technologies.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_empty_object_is_empty_requirements() {
        let reqs: RequirementSet = serde_json::from_str("{}").unwrap();
        assert_eq!(reqs, RequirementSet::default());
    }
}

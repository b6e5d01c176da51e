//! Interview prep: likely questions with talking points, driven by the skill gaps
//! from the stored match breakdown.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{INTERVIEW_PREP_PROMPT_TEMPLATE, INTERVIEW_PREP_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJob;
use crate::models::nullable::null_as_default;
use crate::models::resume::ParsedResume;

/// At most this many gaps are sent to the model.
const MAX_GAP_QUESTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Gap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub category: QuestionCategory,
    pub question: String,
    pub talking_point: String,
}

/// Stored as JSON in `pages.interview_prep`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPrep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<InterviewQuestion>,
}

impl InterviewPrep {
    pub fn count(&self, category: QuestionCategory) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .count()
    }
}

pub async fn generate_interview_prep(
    llm: &LlmClient,
    resume: &ParsedResume,
    job: &ParsedJob,
    missing_skills: &[String],
) -> Result<InterviewPrep, AppError> {
    let prompt = build_interview_prompt(resume, job, missing_skills)?;
    let prep: InterviewPrep = llm
        .call_json(&prompt, &json_system(INTERVIEW_PREP_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Interview prep LLM call failed: {e}")))?;

    if prep.questions.is_empty() {
        return Err(AppError::Llm("Interview prep returned no questions".to_string()));
    }
    Ok(prep)
}

pub fn build_interview_prompt(
    resume: &ParsedResume,
    job: &ParsedJob,
    missing_skills: &[String],
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
    let job_json = serde_json::to_string_pretty(job)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize job: {e}")))?;

    let gaps = if missing_skills.is_empty() {
        "(none)".to_string()
    } else {
        missing_skills
            .iter()
            .take(MAX_GAP_QUESTIONS)
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(INTERVIEW_PREP_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_json}", &job_json)
        .replace("{missing_skills}", &gaps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_caps_gap_list() {
        let missing: Vec<String> = ["a1", "b2", "c3", "d4", "e5", "f6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let prompt =
            build_interview_prompt(&ParsedResume::default(), &ParsedJob::default(), &missing)
                .unwrap();
        assert!(prompt.contains("- d4"));
        assert!(!prompt.contains("- e5"));
    }

    #[test]
    fn test_prompt_without_gaps() {
        let prompt =
            build_interview_prompt(&ParsedResume::default(), &ParsedJob::default(), &[]).unwrap();
        assert!(prompt.contains("(none)"));
        assert!(!prompt.contains("{missing_skills}"));
    }

    #[test]
    fn test_prep_deserializes_and_counts() {
        let json = r#"{
            "questions": [
                {"category": "technical", "question": "Q1", "talking_point": "T1"},
                {"category": "behavioral", "question": "Q2", "talking_point": "T2"},
                {"category": "gap", "question": "Q3", "talking_point": "T3"},
                {"category": "behavioral", "question": "Q4", "talking_point": "T4"}
            ]
        }"#;
        let prep: InterviewPrep = serde_json::from_str(json).unwrap();
        assert_eq!(prep.count(QuestionCategory::Behavioral), 2);
        assert_eq!(prep.count(QuestionCategory::Gap), 1);
        assert_eq!(prep.count(QuestionCategory::Technical), 1);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "questions": [{"category": "trivia", "question": "Q", "talking_point": "T"}]
        }"#;
        assert!(serde_json::from_str::<InterviewPrep>(json).is_err());
    }
}

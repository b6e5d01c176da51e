//! Landing-page copy generation: one LLM call, validated and retried on bad shape.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts::{PAGE_CONTENT_PROMPT_TEMPLATE, PAGE_CONTENT_ROLE};
use crate::llm_client::prompts::{json_system, GROUNDING_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::matching::model::MatchResult;
use crate::models::job::ParsedJob;
use crate::models::nullable::null_as_default;
use crate::models::resume::ParsedResume;

/// Extra LLM attempts when the returned content fails validation.
const MAX_CONTENT_RETRIES: u32 = 2;
const MAX_SECTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub title: String,
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence: Vec<String>,
}

/// Generated copy for a landing page. Stored as JSON in `pages.content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub headline: String,
    pub pitch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<PageSection>,
    #[serde(default)]
    pub call_to_action: Option<String>,
}

impl PageContent {
    /// Checks the minimum shape a page needs to render.
    pub fn validate(&self) -> Result<(), String> {
        if self.headline.trim().is_empty() {
            return Err("headline is empty".to_string());
        }
        if self.pitch.trim().is_empty() {
            return Err("pitch is empty".to_string());
        }
        if self.sections.is_empty() {
            return Err("no sections".to_string());
        }
        if let Some(i) = self
            .sections
            .iter()
            .position(|s| s.title.trim().is_empty() || s.body.trim().is_empty())
        {
            return Err(format!("section {i} has an empty title or body"));
        }
        Ok(())
    }
}

/// Generates page content. Retries up to `MAX_CONTENT_RETRIES` times when the
/// model returns content that fails [`PageContent::validate`].
pub async fn generate_page_content(
    llm: &LlmClient,
    resume: &ParsedResume,
    job: &ParsedJob,
    match_result: &MatchResult,
) -> Result<PageContent, AppError> {
    let prompt = build_page_prompt(resume, job, match_result)?;
    let system = json_system(PAGE_CONTENT_ROLE);

    let mut last_problem = String::new();
    for attempt in 0..=MAX_CONTENT_RETRIES {
        let mut content: PageContent = llm
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Page content LLM call failed: {e}")))?;

        match content.validate() {
            Ok(()) => {
                if content.sections.len() > MAX_SECTIONS {
                    warn!(
                        "Model returned {} sections (max {MAX_SECTIONS}), truncating",
                        content.sections.len()
                    );
                    content.sections.truncate(MAX_SECTIONS);
                }
                return Ok(content);
            }
            Err(problem) => {
                warn!(
                    "Page content attempt {}/{} invalid: {problem}",
                    attempt + 1,
                    MAX_CONTENT_RETRIES + 1
                );
                last_problem = problem;
            }
        }
    }

    Err(AppError::Llm(format!(
        "Page content invalid after {} attempts: {last_problem}",
        MAX_CONTENT_RETRIES + 1
    )))
}

/// Fills the page prompt template with the serialized inputs.
pub fn build_page_prompt(
    resume: &ParsedResume,
    job: &ParsedJob,
    match_result: &MatchResult,
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
    let job_json = serde_json::to_string_pretty(job)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize job: {e}")))?;
    let match_json = serde_json::to_string_pretty(&serde_json::json!({
        "score": match_result.score,
        "matched_skills": match_result.breakdown.matched_skills,
        "missing_skills": match_result.breakdown.missing_skills,
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize match: {e}")))?;

    Ok(PAGE_CONTENT_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{resume_json}", &resume_json)
        .replace("{job_json}", &job_json)
        .replace("{match_json}", &match_json))
}

//! Resume and job-description parsers. Both are a single JSON-mode LLM call;
//! the loose output shapes are absorbed by `ParsedResume` / `ParsedJob`.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    JOB_PARSE_PROMPT_TEMPLATE, JOB_PARSE_ROLE, RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_ROLE,
};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJob;
use crate::models::resume::ParsedResume;

/// Parses raw resume text into a `ParsedResume`.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<ParsedResume, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let parsed: ParsedResume = llm
        .call_json(&prompt, &json_system(RESUME_PARSE_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Resume parsing failed: {e}")))?;

    info!(
        skills = parsed.skills.len(),
        experiences = parsed.experiences.len(),
        "Resume parsed"
    );
    Ok(parsed)
}

/// Parses a raw job description into a `ParsedJob`.
pub async fn parse_job(job_text: &str, llm: &LlmClient) -> Result<ParsedJob, AppError> {
    let prompt = JOB_PARSE_PROMPT_TEMPLATE.replace("{job_text}", job_text);
    let parsed: ParsedJob = llm
        .call_json(&prompt, &json_system(JOB_PARSE_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Job parsing failed: {e}")))?;

    info!(
        required = parsed.required_skills.len(),
        preferred = parsed.preferred_skills.len(),
        "Job description parsed"
    );
    Ok(parsed)
}

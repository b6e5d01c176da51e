//! Application and follow-up emails that point the hiring manager at the
//! candidate's page.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts::{
    APPLICATION_EMAIL_INSTRUCTIONS, FOLLOW_UP_EMAIL_INSTRUCTIONS, OUTREACH_EMAIL_PROMPT_TEMPLATE,
    OUTREACH_EMAIL_ROLE,
};
use crate::llm_client::prompts::{json_system, GROUNDING_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::matching::model::MatchResult;
use crate::models::job::ParsedJob;
use crate::models::resume::ParsedResume;

/// Extra LLM attempts when the returned email fails validation.
const MAX_EMAIL_RETRIES: u32 = 1;
const MAX_SUBJECT_CHARS: usize = 120;
const MAX_EMAIL_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    #[default]
    Application,
    FollowUp,
}

impl EmailKind {
    fn instructions(self) -> &'static str {
        match self {
            EmailKind::Application => APPLICATION_EMAIL_INSTRUCTIONS,
            EmailKind::FollowUp => FOLLOW_UP_EMAIL_INSTRUCTIONS,
        }
    }
}

/// Body of `POST /api/v1/pages/:id/email`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub kind: EmailKind,
    #[serde(default)]
    pub recipient_name: Option<String>,
}

impl EmailRequest {
    fn recipient(&self) -> &str {
        self.recipient_name
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or("the hiring manager")
    }
}

/// Stored as JSON in `pages.outreach_email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachEmail {
    #[serde(default)]
    pub kind: EmailKind,
    pub subject: String,
    pub body: String,
}

impl OutreachEmail {
    pub fn validate(&self) -> Result<(), String> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err("subject is empty".to_string());
        }
        if subject.chars().count() > MAX_SUBJECT_CHARS {
            return Err(format!("subject exceeds {MAX_SUBJECT_CHARS} characters"));
        }
        if self.body.trim().is_empty() {
            return Err("body is empty".to_string());
        }
        Ok(())
    }

    /// Appends the page URL when the model left it out of the body.
    pub fn ensure_page_link(&mut self, page_url: &str) {
        if !self.body.contains(page_url) {
            self.body = format!("{}\n\n{page_url}", self.body.trim_end());
        }
    }
}

pub async fn generate_outreach_email(
    llm: &LlmClient,
    resume: &ParsedResume,
    job: &ParsedJob,
    match_result: &MatchResult,
    page_url: &str,
    request: &EmailRequest,
) -> Result<OutreachEmail, AppError> {
    let prompt = build_email_prompt(resume, job, match_result, page_url, request)?;
    let system = json_system(OUTREACH_EMAIL_ROLE);

    let mut last_problem = String::new();
    for attempt in 0..=MAX_EMAIL_RETRIES {
        let mut email: OutreachEmail = llm
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Email LLM call failed: {e}")))?;

        match email.validate() {
            Ok(()) => {
                email.kind = request.kind;
                email.ensure_page_link(page_url);
                return Ok(email);
            }
            Err(problem) => {
                warn!(
                    "Email attempt {}/{} invalid: {problem}",
                    attempt + 1,
                    MAX_EMAIL_RETRIES + 1
                );
                last_problem = problem;
            }
        }
    }

    Err(AppError::Llm(format!(
        "Email invalid after {} attempts: {last_problem}",
        MAX_EMAIL_RETRIES + 1
    )))
}

pub fn build_email_prompt(
    resume: &ParsedResume,
    job: &ParsedJob,
    match_result: &MatchResult,
    page_url: &str,
    request: &EmailRequest,
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
    let job_json = serde_json::to_string_pretty(job)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize job: {e}")))?;

    let matched = &match_result.breakdown.matched_skills;
    let matched_skills = if matched.is_empty() {
        "(none)".to_string()
    } else {
        matched
            .iter()
            .take(MAX_EMAIL_SKILLS)
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(OUTREACH_EMAIL_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{resume_json}", &resume_json)
        .replace("{job_json}", &job_json)
        .replace("{matched_skills}", &matched_skills)
        .replace("{page_url}", page_url)
        .replace("{recipient}", request.recipient())
        .replace("{email_instructions}", request.kind.instructions()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::model::MatchBreakdown;

    const PAGE_URL: &str = "http://localhost:3000/p/jane-doe-globex-3f9a1c";

    fn make_match(matched: &[&str]) -> MatchResult {
        MatchResult {
            score: 72,
            breakdown: MatchBreakdown {
                skills_match: 67,
                experience_match: 75,
                requirements_match: 75,
                matched_skills: matched.iter().map(|s| s.to_string()).collect(),
                missing_skills: vec!["docker".to_string()],
                total_required_skills: matched.len() + 1,
                total_matched_skills: matched.len(),
            },
        }
    }

    fn make_email(subject: &str, body: &str) -> OutreachEmail {
        OutreachEmail {
            kind: EmailKind::Application,
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let request = EmailRequest {
            kind: EmailKind::FollowUp,
            recipient_name: Some("Sam".to_string()),
        };
        let prompt = build_email_prompt(
            &ParsedResume::default(),
            &ParsedJob::default(),
            &make_match(&["rust", "kafka"]),
            PAGE_URL,
            &request,
        )
        .unwrap();

        assert!(prompt.contains(PAGE_URL));
        assert!(prompt.contains("RECIPIENT: Sam"));
        assert!(prompt.contains("- kafka"));
        assert!(prompt.contains(FOLLOW_UP_EMAIL_INSTRUCTIONS));
        for placeholder in ["{page_url}", "{recipient}", "{email_instructions}"] {
            assert!(!prompt.contains(placeholder), "unfilled {placeholder}");
        }
    }

    #[test]
    fn test_prompt_defaults() {
        let prompt = build_email_prompt(
            &ParsedResume::default(),
            &ParsedJob::default(),
            &make_match(&[]),
            PAGE_URL,
            &EmailRequest::default(),
        )
        .unwrap();

        assert!(prompt.contains("RECIPIENT: the hiring manager"));
        assert!(prompt.contains("(none)"));
        assert!(prompt.contains(APPLICATION_EMAIL_INSTRUCTIONS));
    }

    #[test]
    fn test_validate_subject_and_body() {
        let good = make_email("Halved deploy time at Acme", "Hi Sam");
        assert!(good.validate().is_ok());
        assert!(make_email("  ", "Hi Sam").validate().is_err());
        assert!(make_email("Subject", "\n").validate().is_err());

        let long_subject = "x".repeat(MAX_SUBJECT_CHARS + 1);
        assert!(make_email(&long_subject, "Hi").validate().is_err());
    }

    #[test]
    fn test_ensure_page_link_appends_once() {
        let mut email = make_email("Subject", "Hi Sam,\n\nBest,\nJane\n");
        email.ensure_page_link(PAGE_URL);
        assert_eq!(email.body, format!("Hi Sam,\n\nBest,\nJane\n\n{PAGE_URL}"));

        email.ensure_page_link(PAGE_URL);
        assert_eq!(email.body.matches(PAGE_URL).count(), 1);
    }

    #[test]
    fn test_email_deserializes_without_kind() {
        let json = r#"{"subject": "Hello", "body": "Hi"}"#;
        let email: OutreachEmail = serde_json::from_str(json).unwrap();
        assert_eq!(email.kind, EmailKind::Application);
    }

    #[test]
    fn test_request_parses_follow_up() {
        let request: EmailRequest = serde_json::from_str(r#"{"kind": "follow_up"}"#).unwrap();
        assert_eq!(request.kind, EmailKind::FollowUp);
        assert!(request.recipient_name.is_none());
    }
}

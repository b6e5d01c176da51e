//! Landing-page pipeline. Runs in the background after `POST /api/v1/pages`.
//!
//! Flow: pending → parsing (resume ∥ job) → scoring → generating → complete.
//! Any error moves the page to `failed` with `error_message` set; clients poll
//! `GET /api/v1/pages/:id` for progress.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::page_content::generate_page_content;
use crate::generation::parsers::{parse_job, parse_resume};
use crate::llm_client::LlmClient;
use crate::matching::fit_scoring::FitScorer;
use crate::matching::model::MatchResult;
use crate::models::job::ParsedJob;
use crate::models::page::{PageRow, PageStatus};
use crate::models::resume::ParsedResume;

const SLUG_SUFFIX_LEN: usize = 6;
const MAX_SLUG_WORDS: usize = 6;
/// Reported for pages scored before the backend was recorded.
const UNKNOWN_BACKEND: &str = "unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageRequest {
    pub user_id: Uuid,
    pub resume_text: String,
    pub job_text: String,
    /// Used for the slug until the resume is parsed. Optional.
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// JSON columns filled in on demand after the page is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageArtifact {
    InterviewPrep,
    OutreachEmail,
    CareerAssets,
}

impl PageArtifact {
    pub fn column(self) -> &'static str {
        match self {
            PageArtifact::InterviewPrep => "interview_prep",
            PageArtifact::OutreachEmail => "outreach_email",
            PageArtifact::CareerAssets => "career_assets",
        }
    }
}

/// Everything the background task needs; cloned out of `AppState`.
#[derive(Clone)]
pub struct PipelineDeps {
    pub db: PgPool,
    pub llm: LlmClient,
    pub fit_scorer: Arc<dyn FitScorer>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Inserts a `pending` page row and returns it. Does not start generation.
pub async fn create_page(pool: &PgPool, request: &CreatePageRequest) -> Result<PageRow, AppError> {
    let id = Uuid::new_v4();
    let slug = build_slug(
        request.candidate_name.as_deref(),
        request.company_name.as_deref(),
        &id,
    );

    let page = sqlx::query_as::<_, PageRow>(
        r#"
        INSERT INTO pages (id, user_id, slug, resume_text, job_text, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.user_id)
    .bind(&slug)
    .bind(&request.resume_text)
    .bind(&request.job_text)
    .bind(PageStatus::Pending.as_str())
    .fetch_one(pool)
    .await?;

    info!(
        "Created page {} ({}) for user {}",
        page.id, page.slug, page.user_id
    );
    Ok(page)
}

/// Runs the full pipeline for `page_id`. Never returns an error: failures are
/// written to the row so pollers can see them.
pub async fn run_page_pipeline(deps: PipelineDeps, page_id: Uuid) {
    if let Err(e) = run_steps(&deps, page_id).await {
        error!("Page {page_id} failed: {e}");
        if let Err(db_err) = mark_failed(&deps.db, page_id, &e.to_string()).await {
            error!("Could not record failure for page {page_id}: {db_err}");
        }
    }
}

/// Recomputes the score from the stored parsed documents and persists it.
pub async fn rescore_page(
    pool: &PgPool,
    fit_scorer: &dyn FitScorer,
    page_id: Uuid,
) -> Result<MatchResult, AppError> {
    let page = fetch_page(pool, page_id).await?;
    let (resume, job) = parsed_documents(&page)?;

    let result = fit_scorer
        .score(&resume.to_profile(), &job.to_requirements())
        .await;
    save_match(pool, page_id, &result, fit_scorer.backend()).await?;

    info!("Rescored page {page_id}: {}/100", result.score);
    Ok(result)
}

pub async fn fetch_page(pool: &PgPool, page_id: Uuid) -> Result<PageRow, AppError> {
    sqlx::query_as::<_, PageRow>("SELECT * FROM pages WHERE id = $1")
        .bind(page_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {page_id} not found")))
}

/// Decodes the parsed resume and job stored on a page.
pub fn parsed_documents(page: &PageRow) -> Result<(ParsedResume, ParsedJob), AppError> {
    let resume = decode_column::<ParsedResume>(page.resume_parsed.as_ref(), "resume_parsed")?;
    let job = decode_column::<ParsedJob>(page.job_parsed.as_ref(), "job_parsed")?;
    match (resume, job) {
        (Some(r), Some(j)) => Ok((r, j)),
        _ => Err(AppError::UnprocessableEntity(format!(
            "Page {} has not been parsed yet (status: {})",
            page.id, page.status
        ))),
    }
}

/// Decodes the stored match breakdown and score, if the page has been scored.
pub fn stored_match(page: &PageRow) -> Result<Option<MatchResult>, AppError> {
    let Some(score) = page.match_score else {
        return Ok(None);
    };
    let breakdown = decode_column(page.match_breakdown.as_ref(), "match_breakdown")?;
    Ok(breakdown.map(|breakdown| MatchResult {
        score: score.clamp(0, 100) as u32,
        breakdown,
    }))
}

/// Backend that produced the stored score.
pub fn stored_backend(page: &PageRow) -> &str {
    page.match_backend.as_deref().unwrap_or(UNKNOWN_BACKEND)
}

/// Writes a generated artifact into its column on the page row.
pub async fn save_artifact<T: serde::Serialize>(
    pool: &PgPool,
    page_id: Uuid,
    artifact: PageArtifact,
    value: &T,
) -> Result<(), AppError> {
    let sql = format!(
        "UPDATE pages SET {} = $1, updated_at = NOW() WHERE id = $2",
        artifact.column()
    );
    sqlx::query(&sql)
        .bind(to_json(value)?)
        .bind(page_id)
        .execute(pool)
        .await?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

async fn run_steps(deps: &PipelineDeps, page_id: Uuid) -> Result<(), AppError> {
    let page = fetch_page(&deps.db, page_id).await?;
    if page
        .status
        .parse::<PageStatus>()
        .map(PageStatus::is_terminal)
        .unwrap_or(false)
    {
        info!("Page {page_id} already {}, skipping pipeline", page.status);
        return Ok(());
    }

    // Step 1: parse both documents in parallel
    set_status(&deps.db, page_id, PageStatus::Parsing).await?;
    let (resume, job) = tokio::try_join!(
        parse_resume(&page.resume_text, &deps.llm),
        parse_job(&page.job_text, &deps.llm),
    )?;

    info!(
        "Page {page_id}: {} for {} at {}",
        resume.display_name(),
        job.role_title(),
        job.company_name()
    );

    // Step 2: persist parsed documents
    sqlx::query(
        r#"
        UPDATE pages
        SET resume_parsed = $1, job_parsed = $2, status = $3, updated_at = NOW()
        WHERE id = $4
        "#,
    )
    .bind(to_json(&resume)?)
    .bind(to_json(&job)?)
    .bind(PageStatus::Scoring.as_str())
    .bind(page_id)
    .execute(&deps.db)
    .await?;

    // Step 3: score
    let match_result = deps
        .fit_scorer
        .score(&resume.to_profile(), &job.to_requirements())
        .await;
    let backend = deps.fit_scorer.backend();
    save_match(&deps.db, page_id, &match_result, backend).await?;
    info!(
        "Page {page_id} scored {}/100 ({backend} backend)",
        match_result.score
    );

    // Step 4: generate copy
    set_status(&deps.db, page_id, PageStatus::Generating).await?;
    let content = generate_page_content(&deps.llm, &resume, &job, &match_result).await?;

    // Step 5: persist copy
    sqlx::query(
        r#"
        UPDATE pages
        SET content = $1, status = $2, error_message = NULL, updated_at = NOW()
        WHERE id = $3
        "#,
    )
    .bind(to_json(&content)?)
    .bind(PageStatus::Complete.as_str())
    .bind(page_id)
    .execute(&deps.db)
    .await?;

    info!("Page {page_id} complete");
    Ok(())
}

async fn set_status(pool: &PgPool, page_id: Uuid, status: PageStatus) -> Result<(), AppError> {
    sqlx::query("UPDATE pages SET status = $1, updated_at = NOW() WHERE id = $2")
        .bind(status.as_str())
        .bind(page_id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn mark_failed(pool: &PgPool, page_id: Uuid, message: &str) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE pages SET status = $1, error_message = $2, updated_at = NOW() WHERE id = $3",
    )
    .bind(PageStatus::Failed.as_str())
    .bind(message)
    .bind(page_id)
    .execute(pool)
    .await?;
    Ok(())
}

async fn save_match(
    pool: &PgPool,
    page_id: Uuid,
    result: &MatchResult,
    backend: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE pages
        SET match_score = $1, match_breakdown = $2, match_backend = $3, updated_at = NOW()
        WHERE id = $4
        "#,
    )
    .bind(result.score as i32)
    .bind(to_json(&result.breakdown)?)
    .bind(backend)
    .bind(page_id)
    .execute(pool)
    .await?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize column: {e}")))
}

fn decode_column<T: serde::de::DeserializeOwned>(
    value: Option<&Value>,
    column: &str,
) -> Result<Option<T>, AppError> {
    value
        .map(|v| serde_json::from_value(v.clone()))
        .transpose()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt {column} column: {e}")))
}

/// `jane-doe-globex-3f9a1c`: lowercase ASCII words from name and company, plus a
/// short suffix from the page id so slugs stay unique.
pub fn build_slug(candidate_name: Option<&str>, company_name: Option<&str>, id: &Uuid) -> String {
    let words: Vec<String> = [candidate_name, company_name]
        .into_iter()
        .flatten()
        .flat_map(|s| {
            s.split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(|w| w.to_ascii_lowercase())
                .collect::<Vec<_>>()
        })
        .take(MAX_SLUG_WORDS)
        .collect();

    let hex = id.simple().to_string();
    let suffix = &hex[..SLUG_SUFFIX_LEN];

    if words.is_empty() {
        format!("page-{suffix}")
    } else {
        format!("{}-{suffix}", words.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_page(resume_parsed: Option<Value>, job_parsed: Option<Value>) -> PageRow {
        PageRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            slug: "page-abc123".to_string(),
            resume_text: "resume".to_string(),
            job_text: "job".to_string(),
            resume_parsed,
            job_parsed,
            match_score: None,
            match_breakdown: None,
            match_backend: None,
            content: None,
            interview_prep: None,
            outreach_email: None,
            career_assets: None,
            status: PageStatus::Pending.as_str().to_string(),
            error_message: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_slug_from_name_and_company() {
        let id = Uuid::parse_str("3f9a1c2e-0000-4000-8000-000000000000").unwrap();
        let slug = build_slug(Some("Jane  O'Doe"), Some("Globex, Inc."), &id);
        assert_eq!(slug, "jane-o-doe-globex-inc-3f9a1c");
    }

    #[test]
    fn test_slug_without_names() {
        let id = Uuid::parse_str("abcdef12-0000-4000-8000-000000000000").unwrap();
        assert_eq!(build_slug(None, None, &id), "page-abcdef");
        assert_eq!(build_slug(Some("  "), Some("ü"), &id), "page-abcdef");
    }

    #[test]
    fn test_slug_word_cap() {
        let id = Uuid::new_v4();
        let slug = build_slug(Some("a b c d e f g h"), None, &id);
        assert!(slug.starts_with("a-b-c-d-e-f-"));
        assert!(!slug.contains("-g-"));
    }

    #[test]
    fn test_parsed_documents_requires_both() {
        let page = make_page(Some(json!({"skills": ["rust"]})), None);
        assert!(matches!(
            parsed_documents(&page),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_parsed_documents_decodes() {
        let page = make_page(
            Some(json!({"full_name": "Jane", "skills": ["rust"]})),
            Some(json!({"required_skills": ["rust"]})),
        );
        let (resume, job) = parsed_documents(&page).unwrap();
        assert_eq!(resume.display_name(), "Jane");
        assert_eq!(job.required_skills, vec!["rust".to_string()]);
    }

    #[test]
    fn test_stored_match_roundtrip() {
        let mut page = make_page(None, None);
        assert!(stored_match(&page).unwrap().is_none());

        page.match_score = Some(72);
        page.match_breakdown = Some(json!({
            "skills_match": 67,
            "experience_match": 75,
            "requirements_match": 75,
            "matched_skills": ["python", "aws"],
            "missing_skills": ["docker"],
            "total_required_skills": 3,
            "total_matched_skills": 2
        }));
        let result = stored_match(&page).unwrap().unwrap();
        assert_eq!(result.score, 72);
        assert_eq!(result.breakdown.missing_skills, vec!["docker".to_string()]);
    }

    #[test]
    fn test_stored_backend_comes_from_the_row() {
        let mut page = make_page(None, None);
        assert_eq!(stored_backend(&page), UNKNOWN_BACKEND);

        page.match_backend = Some("semantic".to_string());
        assert_eq!(stored_backend(&page), "semantic");
    }

    #[test]
    fn test_artifact_columns() {
        assert_eq!(PageArtifact::InterviewPrep.column(), "interview_prep");
        assert_eq!(PageArtifact::OutreachEmail.column(), "outreach_email");
        assert_eq!(PageArtifact::CareerAssets.column(), "career_assets");
    }

    #[test]
    fn test_corrupt_column_is_internal_error() {
        let mut page = make_page(None, None);
        page.match_score = Some(50);
        page.match_breakdown = Some(json!({"skills_match": "lots"}));
        assert!(matches!(stored_match(&page), Err(AppError::Internal(_))));
    }

    #[test]
    fn test_create_request_optional_names() {
        let request: CreatePageRequest = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "resume_text": "r",
            "job_text": "j"
        }))
        .unwrap();
        assert!(request.candidate_name.is_none());
        assert!(request.company_name.is_none());
    }
}

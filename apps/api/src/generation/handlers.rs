//! Axum route handlers for the Pages API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::career_assets::{extract_career_assets, AssetKind, CareerAssets};
use crate::generation::interview_prep::{generate_interview_prep, InterviewPrep, QuestionCategory};
use crate::generation::outreach_email::{generate_outreach_email, EmailRequest, OutreachEmail};
use crate::generation::pipeline::{
    create_page, fetch_page, parsed_documents, rescore_page, run_page_pipeline, save_artifact,
    stored_backend, stored_match, CreatePageRequest, PageArtifact, PipelineDeps,
};
use crate::matching::handlers::MatchScoreResponse;
use crate::matching::model::MatchResult;
use crate::models::page::PageRow;
use crate::state::AppState;

/// Inputs above this size are almost certainly not a single resume or posting.
const MAX_INPUT_CHARS: usize = 50_000;

#[derive(Debug, Serialize)]
pub struct CreatePageResponse {
    pub page_id: Uuid,
    pub slug: String,
    pub public_url: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewPrepResponse {
    pub page_id: Uuid,
    pub interview_prep: InterviewPrep,
}

#[derive(Debug, Serialize)]
pub struct OutreachEmailResponse {
    pub page_id: Uuid,
    pub email: OutreachEmail,
}

#[derive(Debug, Serialize)]
pub struct CareerAssetsResponse {
    pub page_id: Uuid,
    pub career_assets: CareerAssets,
}

/// POST /api/v1/pages
///
/// Creates a `pending` page and starts the generation pipeline in the background.
/// Returns 202 immediately; poll `GET /api/v1/pages/:id` for progress.
pub async fn handle_create_page(
    State(state): State<AppState>,
    Json(request): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<CreatePageResponse>), AppError> {
    validate_text("resume_text", &request.resume_text)?;
    validate_text("job_text", &request.job_text)?;

    let page = create_page(&state.db, &request).await?;

    let deps = PipelineDeps {
        db: state.db.clone(),
        llm: state.llm.clone(),
        fit_scorer: state.fit_scorer.clone(),
    };
    tokio::spawn(run_page_pipeline(deps, page.id));

    Ok((
        StatusCode::ACCEPTED,
        Json(CreatePageResponse {
            page_id: page.id,
            public_url: state.config.public_page_url(&page.slug),
            slug: page.slug,
            status: page.status,
        }),
    ))
}

/// GET /api/v1/pages/:id
pub async fn handle_get_page(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Json<PageRow>, AppError> {
    Ok(Json(fetch_page(&state.db, page_id).await?))
}

/// GET /api/v1/pages/:id/match
///
/// Stored match result with its display label, color and the backend that
/// produced it.
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let page = fetch_page(&state.db, page_id).await?;
    let result = stored_match(&page)?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Page {page_id} has no match score yet (status: {})",
            page.status
        ))
    })?;
    Ok(Json(MatchScoreResponse::new(result, stored_backend(&page))))
}

/// POST /api/v1/pages/:id/rescore
pub async fn handle_rescore(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let result = rescore_page(&state.db, state.fit_scorer.as_ref(), page_id).await?;
    Ok(Json(MatchScoreResponse::new(result, state.fit_scorer.backend())))
}

/// POST /api/v1/pages/:id/interview-prep
///
/// Generates and stores interview questions for a parsed page.
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Json<InterviewPrepResponse>, AppError> {
    let page = fetch_page(&state.db, page_id).await?;
    let (resume, job) = parsed_documents(&page)?;
    let missing_skills = match_for(&state, &page).await?.breakdown.missing_skills;

    let interview_prep = generate_interview_prep(&state.llm, &resume, &job, &missing_skills).await?;
    save_artifact(
        &state.db,
        page_id,
        PageArtifact::InterviewPrep,
        &interview_prep,
    )
    .await?;

    info!(
        technical = interview_prep.count(QuestionCategory::Technical),
        behavioral = interview_prep.count(QuestionCategory::Behavioral),
        gap = interview_prep.count(QuestionCategory::Gap),
        "Stored interview prep for page {page_id}"
    );

    Ok(Json(InterviewPrepResponse {
        page_id,
        interview_prep,
    }))
}

/// POST /api/v1/pages/:id/email
///
/// Writes an application or follow-up email linking to the page. The JSON body
/// is optional: `{"kind": "application" | "follow_up", "recipient_name": "..."}`.
pub async fn handle_outreach_email(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
    request: Option<Json<EmailRequest>>,
) -> Result<Json<OutreachEmailResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let page = fetch_page(&state.db, page_id).await?;
    let (resume, job) = parsed_documents(&page)?;
    let match_result = match_for(&state, &page).await?;
    let page_url = state.config.public_page_url(&page.slug);

    let email = generate_outreach_email(
        &state.llm,
        &resume,
        &job,
        &match_result,
        &page_url,
        &request,
    )
    .await?;
    save_artifact(&state.db, page_id, PageArtifact::OutreachEmail, &email).await?;

    info!("Stored {:?} email for page {page_id}", email.kind);
    Ok(Json(OutreachEmailResponse { page_id, email }))
}

/// POST /api/v1/pages/:id/career-assets
///
/// Extracts reusable proof points from the parsed resume, ranked against the
/// page's job.
pub async fn handle_career_assets(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Json<CareerAssetsResponse>, AppError> {
    let page = fetch_page(&state.db, page_id).await?;
    let (resume, job) = parsed_documents(&page)?;

    let career_assets = extract_career_assets(&state.llm, &resume, &job).await?;
    save_artifact(
        &state.db,
        page_id,
        PageArtifact::CareerAssets,
        &career_assets,
    )
    .await?;

    info!(
        achievements = career_assets.count(AssetKind::Achievement),
        stories = career_assets.count(AssetKind::Story),
        differentiators = career_assets.count(AssetKind::Differentiator),
        "Stored career assets for page {page_id}"
    );

    Ok(Json(CareerAssetsResponse {
        page_id,
        career_assets,
    }))
}

/// The stored match, or a fresh score when the pipeline has not scored the page yet.
async fn match_for(state: &AppState, page: &PageRow) -> Result<MatchResult, AppError> {
    if let Some(result) = stored_match(page)? {
        return Ok(result);
    }
    let (resume, job) = parsed_documents(page)?;
    let result = state
        .fit_scorer
        .score(&resume.to_profile(), &job.to_requirements())
        .await;
    Ok(result)
}

fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "{field} exceeds {MAX_INPUT_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_rejects_blank() {
        assert!(matches!(
            validate_text("resume_text", "   \n"),
            Err(AppError::Validation(msg)) if msg.contains("resume_text")
        ));
    }

    #[test]
    fn test_validate_text_rejects_oversized() {
        let big = "x".repeat(MAX_INPUT_CHARS + 1);
        assert!(validate_text("job_text", &big).is_err());
    }

    #[test]
    fn test_validate_text_accepts_normal() {
        assert!(validate_text("job_text", "Senior Rust Engineer").is_ok());
    }
}

//! Stateless scoring endpoint. Needs neither the database nor the LLM.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::model::{CandidateProfile, MatchResult, RequirementSet};
use crate::matching::presentation::{score_color, score_label, ScoreBand};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    #[serde(default)]
    pub profile: CandidateProfile,
    #[serde(default)]
    pub requirements: RequirementSet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchScoreResponse {
    pub result: MatchResult,
    pub band: ScoreBand,
    pub label: String,
    pub color: String,
    pub backend: String,
}

impl MatchScoreResponse {
    pub fn new(result: MatchResult, backend: &str) -> Self {
        Self {
            band: ScoreBand::from_score(result.score),
            label: score_label(result.score).to_string(),
            color: score_color(result.score).to_string(),
            result,
            backend: backend.to_string(),
        }
    }
}

/// POST /api/v1/match-score
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let result = state
        .fit_scorer
        .score(&request.profile, &request.requirements)
        .await;
    Ok(Json(MatchScoreResponse::new(result, state.fit_scorer.backend())))
}

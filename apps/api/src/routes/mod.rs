pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::matching::handlers::handle_match_score;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/match-score", post(handle_match_score))
        // Pages API
        .route("/api/v1/pages", post(handlers::handle_create_page))
        .route("/api/v1/pages/:id", get(handlers::handle_get_page))
        .route("/api/v1/pages/:id/match", get(handlers::handle_get_match))
        .route("/api/v1/pages/:id/rescore", post(handlers::handle_rescore))
        .route(
            "/api/v1/pages/:id/interview-prep",
            post(handlers::handle_interview_prep),
        )
        .route(
            "/api/v1/pages/:id/email",
            post(handlers::handle_outreach_email),
        )
        .route(
            "/api/v1/pages/:id/career-assets",
            post(handlers::handle_career_assets),
        )
        .with_state(state)
}

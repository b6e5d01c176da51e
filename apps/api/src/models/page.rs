use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: String,
    pub resume_text: String,
    pub job_text: String,
    pub resume_parsed: Option<Value>,
    pub job_parsed: Option<Value>,
    pub match_score: Option<i32>,
    pub match_breakdown: Option<Value>,
    /// `FitScorer::backend()` of the scorer that produced `match_score`.
    pub match_backend: Option<String>,
    pub content: Option<Value>,
    pub interview_prep: Option<Value>,
    pub outreach_email: Option<Value>,
    pub career_assets: Option<Value>,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle of a landing page, stored as a lowercase string in `pages.status`.
/// Clients poll `GET /api/v1/pages/:id` and watch this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Pending,
    Parsing,
    Scoring,
    Generating,
    Complete,
    Failed,
}

impl PageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PageStatus::Pending => "pending",
            PageStatus::Parsing => "parsing",
            PageStatus::Scoring => "scoring",
            PageStatus::Generating => "generating",
            PageStatus::Complete => "complete",
            PageStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PageStatus::Complete | PageStatus::Failed)
    }
}

impl std::str::FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PageStatus::Pending),
            "parsing" => Ok(PageStatus::Parsing),
            "scoring" => Ok(PageStatus::Scoring),
            "generating" => Ok(PageStatus::Generating),
            "complete" => Ok(PageStatus::Complete),
            "failed" => Ok(PageStatus::Failed),
            other => Err(format!("unknown page status '{other}'")),
        }
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

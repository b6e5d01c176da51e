//! Career-intelligence assets: reusable proof points mined from a parsed resume
//! (measurable achievements, behavioral stories, differentiators), ranked by how
//! many of the target job's skills each one demonstrates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::prompts::{CAREER_ASSETS_PROMPT_TEMPLATE, CAREER_ASSETS_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;
use crate::matching::fit_scoring::{normalize_skill, skills_overlap};
use crate::models::job::ParsedJob;
use crate::models::nullable::null_as_default;
use crate::models::resume::ParsedResume;

const MAX_ASSETS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Achievement,
    Story,
    Differentiator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAsset {
    pub kind: AssetKind,
    pub title: String,
    pub detail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Job skills this asset demonstrates. Filled in by [`CareerAssets::rank_for_job`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevant_skills: Vec<String>,
}

/// Stored as JSON in `pages.career_assets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAssets {
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<CareerAsset>,
}

impl CareerAssets {
    pub fn count(&self, kind: AssetKind) -> usize {
        self.assets.iter().filter(|a| a.kind == kind).count()
    }

    /// Drops assets with a blank title or detail and caps the list.
    pub fn retain_usable(&mut self) {
        self.assets
            .retain(|a| !a.title.trim().is_empty() && !a.detail.trim().is_empty());
        self.assets.truncate(MAX_ASSETS);
    }

    /// Tags each asset with the job skills it overlaps and sorts the most
    /// relevant first. The sort is stable, so ties keep the model's order.
    pub fn rank_for_job(&mut self, job: &ParsedJob) {
        let mut seen = BTreeSet::new();
        let job_skills: Vec<String> = job
            .required_skills
            .iter()
            .chain(job.preferred_skills.iter())
            .filter_map(|s| normalize_skill(s))
            .filter(|s| seen.insert(s.clone()))
            .collect();

        for asset in &mut self.assets {
            let asset_skills: Vec<String> = asset
                .skills
                .iter()
                .filter_map(|s| normalize_skill(s))
                .collect();
            asset.relevant_skills = job_skills
                .iter()
                .filter(|job_skill| demonstrates(&asset_skills, job_skill))
                .cloned()
                .collect();
        }

        self.assets
            .sort_by(|a, b| b.relevant_skills.len().cmp(&a.relevant_skills.len()));
    }
}

fn demonstrates(asset_skills: &[String], job_skill: &str) -> bool {
    asset_skills
        .iter()
        .any(|skill| skills_overlap(skill, job_skill))
}

pub async fn extract_career_assets(
    llm: &LlmClient,
    resume: &ParsedResume,
    job: &ParsedJob,
) -> Result<CareerAssets, AppError> {
    let prompt = build_assets_prompt(resume, job)?;
    let mut assets: CareerAssets = llm
        .call_json(&prompt, &json_system(CAREER_ASSETS_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Career asset LLM call failed: {e}")))?;

    let returned = assets.assets.len();
    assets.retain_usable();
    if assets.assets.is_empty() {
        return Err(AppError::Llm("Career asset extraction returned no assets".to_string()));
    }
    assets.rank_for_job(job);

    debug!(
        returned,
        kept = assets.assets.len(),
        "extracted career assets"
    );
    Ok(assets)
}

pub fn build_assets_prompt(resume: &ParsedResume, job: &ParsedJob) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

    let skills: Vec<&str> = job
        .required_skills
        .iter()
        .chain(job.preferred_skills.iter())
        .map(String::as_str)
        .collect();
    let job_skills = if skills.is_empty() {
        "(none listed)".to_string()
    } else {
        skills.join(", ")
    };

    Ok(CAREER_ASSETS_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_skills}", &job_skills))
}

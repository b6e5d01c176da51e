//! Fit Scoring: deterministic, weighted 0–100 fit between a candidate and a job.
//!
//! Three sub-scores are blended:
//! - skills (0.40): job skills matched by substring containment or synonym group
//! - experience (0.35): responsibilities whose keywords appear in experience text
//! - requirements (0.25): business problems whose keywords appear in achievements/highlights
//!
//! `AppState` holds an `Arc<dyn FitScorer>` so the backend can be swapped without
//! touching handlers. `KeywordFitScorer` is the default and delegates to [`score`].

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::debug;

use crate::matching::keywords::{build_evidence, percentage, phrase_coverage};
use crate::matching::model::{CandidateProfile, MatchBreakdown, MatchResult, RequirementSet};
use crate::matching::synonyms::are_synonyms;

pub const SKILLS_WEIGHT: f64 = 0.4;
pub const EXPERIENCE_WEIGHT: f64 = 0.35;
pub const REQUIREMENTS_WEIGHT: f64 = 0.25;

/// Sub-score used when the job lists no skills at all.
pub const EMPTY_SKILLS_SCORE: u32 = 100;
/// Neutral sub-score used when the job lists no responsibilities or business problems.
pub const NEUTRAL_SCORE: u32 = 75;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or pipeline code.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(&self, profile: &CandidateProfile, requirements: &RequirementSet)
        -> MatchResult;

    /// Short backend label surfaced in API responses.
    fn backend(&self) -> &'static str;
}

/// Pure keyword/synonym scorer. Fast, deterministic, no I/O.
pub struct KeywordFitScorer;

#[async_trait]
impl FitScorer for KeywordFitScorer {
    async fn score(
        &self,
        profile: &CandidateProfile,
        requirements: &RequirementSet,
    ) -> MatchResult {
        score(profile, requirements)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Computes the fit score of `profile` against `requirements`.
///
/// Total and pure: never fails, never panics, and returns identical output for
/// identical input.
pub fn score(profile: &CandidateProfile, requirements: &RequirementSet) -> MatchResult {
    let candidate_skills = candidate_skill_set(profile);
    let job_skills = job_skill_list(requirements);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
        .into_iter()
        .partition(|job_skill| skill_matches_any(job_skill, &candidate_skills));

    let total_required_skills = matched_skills.len() + missing_skills.len();
    let total_matched_skills = matched_skills.len();

    let skills_match = if total_required_skills == 0 {
        EMPTY_SKILLS_SCORE
    } else {
        percentage(total_matched_skills, total_required_skills)
    };

    let experience_text = build_evidence(profile.experiences.iter().flat_map(|e| {
        std::iter::once(e.description.as_str())
            .chain(e.achievements.iter().map(String::as_str))
    }));
    let experience_match = phrase_coverage(
        &requirements.responsibilities,
        &experience_text,
        NEUTRAL_SCORE,
    );

    let achievement_text = build_evidence(
        profile
            .experiences
            .iter()
            .flat_map(|e| e.achievements.iter())
            .chain(profile.projects.iter().flat_map(|p| p.highlights.iter()))
            .map(String::as_str),
    );
    let requirements_match = phrase_coverage(
        &requirements.business_problems,
        &achievement_text,
        NEUTRAL_SCORE,
    );

    let score = aggregate(skills_match, experience_match, requirements_match);

    debug!(
        score,
        skills_match,
        experience_match,
        requirements_match,
        total_matched_skills,
        total_required_skills,
        "computed fit score"
    );

    MatchResult {
        score,
        breakdown: MatchBreakdown {
            skills_match,
            experience_match,
            requirements_match,
            matched_skills,
            missing_skills,
            total_required_skills,
            total_matched_skills,
        },
    }
}

/// Weighted blend of the three sub-scores, rounded and clamped to 0–100.
pub fn aggregate(skills_match: u32, experience_match: u32, requirements_match: u32) -> u32 {
    let weighted = skills_match as f64 * SKILLS_WEIGHT
        + experience_match as f64 * EXPERIENCE_WEIGHT
        + requirements_match as f64 * REQUIREMENTS_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u32
}

/// Lowercases and trims a skill. Returns `None` for blank input.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let s = raw.trim().to_lowercase();
    (!s.is_empty()).then_some(s)
}

/// Explicit skills plus every technology tag from experiences and projects.
fn candidate_skill_set(profile: &CandidateProfile) -> BTreeSet<String> {
    profile
        .skills
        .iter()
        .chain(profile.experiences.iter().flat_map(|e| &e.technologies))
        .chain(profile.projects.iter().flat_map(|p| &p.technologies))
        .filter_map(|s| normalize_skill(s))
        .collect()
}

/// Required then preferred skills, normalized, deduplicated in first-seen order.
fn job_skill_list(requirements: &RequirementSet) -> Vec<String> {
    let mut seen = BTreeSet::new();
    requirements
        .required_skills
        .iter()
        .chain(requirements.preferred_skills.iter())
        .filter_map(|s| normalize_skill(s))
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// A job skill matches if any candidate skill overlaps it.
fn skill_matches_any(job_skill: &str, candidate_skills: &BTreeSet<String>) -> bool {
    candidate_skills
        .iter()
        .any(|candidate| skills_overlap(candidate, job_skill))
}

/// Two normalized skills overlap when either contains the other or both belong
/// to a canonical synonym group.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a) || are_synonyms(a, b)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

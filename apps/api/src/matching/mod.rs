// Fit scoring between a candidate profile and a job's requirements.
// Pure and synchronous at the core; `fit_scoring::FitScorer` is the async seam
// the rest of the service depends on.

pub mod fit_scoring;
pub mod handlers;
pub mod keywords;
pub mod model;
pub mod presentation;
pub mod synonyms;

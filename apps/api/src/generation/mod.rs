// Landing-page generation: resume/job parsing, page copy, the on-demand
// generators (interview prep, outreach email, career assets) and the
// background pipeline that ties them together.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod career_assets;
pub mod handlers;
pub mod interview_prep;
pub mod outreach_email;
pub mod page_content;
pub mod parsers;
pub mod pipeline;
pub mod prompts;

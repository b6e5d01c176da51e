// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it; only cross-cutting text lives here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_RULES: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every prompt that writes candidate-facing copy.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Every claim must be supported by the parsed resume provided below. \
    Do NOT invent employers, titles, dates, metrics, or technologies. \
    If the resume does not support a claim, leave it out.";

/// Builds a system prompt from a role description plus the JSON-only rules.
pub fn json_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_RULES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_appends_rules() {
        let system = json_system("You are a resume analyst.");
        assert!(system.starts_with("You are a resume analyst."));
        assert!(system.ends_with(JSON_ONLY_RULES));
    }
}

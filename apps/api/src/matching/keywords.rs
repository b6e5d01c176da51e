//! Keyword overlap between short requirement phrases and free-text evidence.

/// Words at or below this many characters are ignored as a crude stop-word filter.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Splits a phrase on whitespace and keeps lowercase words longer than
/// `MIN_KEYWORD_CHARS` characters. Punctuation inside a word is kept.
pub fn extract_keywords(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// A phrase matches when any of its keywords appears as a substring of `evidence`.
///
/// `evidence` must already be lowercase. A phrase with no qualifying keywords never matches.
pub fn phrase_matches(phrase: &str, evidence: &str) -> bool {
    extract_keywords(phrase)
        .iter()
        .any(|kw| evidence.contains(kw.as_str()))
}

/// Joins text fragments into one lowercase blob for substring search.
pub fn build_evidence<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percentage (rounded) of `phrases` that match `evidence`, or `default_when_empty`
/// when there are no phrases.
pub fn phrase_coverage(phrases: &[String], evidence: &str, default_when_empty: u32) -> u32 {
    if phrases.is_empty() {
        return default_when_empty;
    }
    let matched = phrases
        .iter()
        .filter(|p| phrase_matches(p, evidence))
        .count();
    percentage(matched, phrases.len())
}

/// `part / whole * 100`, rounded half away from zero.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_dropped() {
        let kws = extract_keywords("Own the data team and build pipelines");
        assert_eq!(kws, vec!["build".to_string(), "pipelines".to_string()]);
    }

    #[test]
    fn test_exactly_four_chars_is_dropped() {
        assert!(extract_keywords("lead team").is_empty());
    }

    #[test]
    fn test_hyphenated_keyword_matches_evidence() {
        let evidence = build_evidence(["Worked with Cross-Functional partners"]);
        assert!(phrase_matches(
            "manage large cross-functional teams",
            &evidence
        ));
    }

    #[test]
    fn test_phrase_without_keywords_never_matches() {
        let evidence = build_evidence(["own the team"]);
        assert!(!phrase_matches("own the team", &evidence));
    }

    #[test]
    fn test_keyword_matches_inside_longer_word() {
        let evidence = build_evidence(["Scaled the platform to 10M users"]);
        assert!(phrase_matches("Scale infrastructure", &evidence));
    }

    #[test]
    fn test_coverage_defaults_when_empty() {
        assert_eq!(phrase_coverage(&[], "anything", 75), 75);
    }

    #[test]
    fn test_coverage_rounds() {
        let phrases = vec![
            "deploy services".to_string(),
            "monitor systems".to_string(),
            "write documentation".to_string(),
        ];
        let evidence = build_evidence(["Deployed services to production"]);
        // 1 of 3 → 33.33 → 33
        assert_eq!(phrase_coverage(&phrases, &evidence, 75), 33);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(0, 0), 0);
    }
}

//! The AI control-plane vocabulary.
//!
//! Words in this list are wrapped in underscores wherever they appear as a
//! whole word, so a model reading the sanitized text no longer sees bare role
//! or instruction keywords. The list is ordered and public so callers and
//! tests can inspect exactly what is defused.

/// Keywords neutralized by the `ai_keyword` rule, matched case-insensitively.
pub const AI_KEYWORDS: &[&str] = &[
    "system",
    "user",
    "assistant",
    "model",
    "prompt",
    "instruction",
    "context",
    "token",
    "function",
    "completion",
    "response",
    "davinci",
    "claude",
    "gpt",
    "llm",
    "api",
    "openai",
    "anthropic",
];

/// Delimiter placed on both sides of a matched keyword.
pub const KEYWORD_DELIMITER: &str = "_";

/// Builds the whole-word alternation used by the keyword rule.
pub fn keyword_pattern(keywords: &[&str]) -> String {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\b({})\b", alternation)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_pattern_contains_every_keyword() {
        let pattern = keyword_pattern(AI_KEYWORDS);
        for k in AI_KEYWORDS {
            assert!(pattern.contains(k), "missing {} in {}", k, pattern);
        }
        assert!(pattern.starts_with(r"\b("));
    }

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for k in AI_KEYWORDS {
            assert!(seen.insert(k.to_lowercase()), "duplicate keyword {}", k);
        }
    }
}

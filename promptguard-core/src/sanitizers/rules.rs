//! The built-in prompt-injection rule table.
//!
//! Order matters: each rule sees the output of the ones before it. The code
//! rules run first so their markers exist before the bracket rules, and the
//! square-bracket rule preserves those markers verbatim.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;

use crate::keywords::{keyword_pattern, AI_KEYWORDS, KEYWORD_DELIMITER};
use crate::markers::{
    BRACKETED_MARKERS, CODE_BLOCK_MARKER, DOUBLE_EQUALS, ELLIPSIS, EMPTY_MARKER, EM_DASH, FILTERED_MARKER,
    INLINE_CODE_MARKER, LINK_MARKER, PROPERTY_MARKER,
};
use crate::sanitizers::compiler::{compile_rules, CompiledRules, Replacement, RuleSpec, Stage};

pub const CODE_BLOCK: &str = "code_block";
pub const INLINE_CODE: &str = "inline_code";
pub const HTML_TAG: &str = "html_tag";
pub const CURLY_BRACES: &str = "curly_braces";
pub const SQUARE_BRACKETS: &str = "square_brackets";
pub const PARENTHESES: &str = "parentheses";
pub const AI_KEYWORD: &str = "ai_keyword";
pub const ESCAPE_QUOTES: &str = "escape_quotes";
pub const REMOVE_QUOTES: &str = "remove_quotes";
pub const CONTROL_CHARS: &str = "control_chars";
pub const ELLIPSIS_RUN: &str = "ellipsis";
pub const DASH_RUN: &str = "em_dash";
pub const EQUALS_RUN: &str = "equals_run";
pub const URL: &str = "url";
pub const JSON_PROPERTY: &str = "json_property";
pub const JSON_EMPTY: &str = "json_empty";

/// Name reported when a string was cut at `max_length`.
pub const TRUNCATION: &str = "truncation";

/// The built-in rules, in application order.
pub fn builtin_rule_specs() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(CODE_BLOCK, "```.*?```", Replacement::Marker(CODE_BLOCK_MARKER))
            .dot_matches_new_line()
            .stage(Stage::MarkdownDisallowed),
        RuleSpec::new(INLINE_CODE, "`[^`]*`", Replacement::Marker(INLINE_CODE_MARKER))
            .stage(Stage::MarkdownDisallowed),
        RuleSpec::new(HTML_TAG, "<[^>]*>", Replacement::Delete),
        RuleSpec::new(CURLY_BRACES, r"\{.*?\}", Replacement::Marker(FILTERED_MARKER)).dot_matches_new_line(),
        RuleSpec::new(SQUARE_BRACKETS, r"\[.*?\]", Replacement::Marker(FILTERED_MARKER))
            .dot_matches_new_line()
            .preserve(BRACKETED_MARKERS),
        RuleSpec::new(PARENTHESES, r"\(.*?\)", Replacement::Marker(FILTERED_MARKER)).dot_matches_new_line(),
        RuleSpec::new(AI_KEYWORD, keyword_pattern(AI_KEYWORDS), Replacement::Wrap(KEYWORD_DELIMITER))
            .case_insensitive(),
        RuleSpec::new(ESCAPE_QUOTES, r#"["']"#, Replacement::Escape).stage(Stage::QuotesEscaped),
        RuleSpec::new(REMOVE_QUOTES, r#"["']"#, Replacement::Delete).stage(Stage::QuotesRemoved),
        RuleSpec::new(
            CONTROL_CHARS,
            r"[\x00-\x1F\x7F-\x9F\x{2000}-\x{200F}\x{2028}-\x{202F}]",
            Replacement::Delete,
        )
        .stage(Stage::Strict),
        RuleSpec::new(ELLIPSIS_RUN, r"\.{3,}", Replacement::Marker(ELLIPSIS)).stage(Stage::Strict),
        RuleSpec::new(DASH_RUN, r"-{3,}", Replacement::Marker(EM_DASH)).stage(Stage::Strict),
        RuleSpec::new(EQUALS_RUN, r"={2,}", Replacement::Marker(DOUBLE_EQUALS)).stage(Stage::Strict),
        RuleSpec::new(URL, r"https?://\S+", Replacement::Marker(LINK_MARKER)).stage(Stage::Strict),
        RuleSpec::new(JSON_PROPERTY, r#"\s*"[0-9A-Za-z_]+"\s*:"#, Replacement::Marker(PROPERTY_MARKER)),
        RuleSpec::new(JSON_EMPTY, r"\[\s*\]|\{\s*\}", Replacement::Marker(EMPTY_MARKER)),
    ]
}

lazy_static! {
    static ref BUILTIN_RULES: CompiledRules =
        compile_rules(builtin_rule_specs()).expect("built-in sanitization rules must compile");
}

/// The compiled built-in rule table, shared process-wide.
pub fn builtin_rules() -> &'static CompiledRules {
    &BUILTIN_RULES
}

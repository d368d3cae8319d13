//! compiler.rs - Turns rule specifications into compiled, applicable rules.
//!
//! A `RuleSpec` is plain data: a name, a pattern, a replacement policy and
//! the stage condition that decides whether the rule runs for a given set of
//! options. `compile_rules` builds the regexes once; the resulting
//! `CompiledRules` keeps the specification order, which is the order the
//! pipeline applies them in.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Captures, Regex, RegexBuilder};

use crate::config::SanitizeOptions;
use crate::errors::PromptGuardError;

/// Maximum allowed length for a rule pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// What a rule writes in place of each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// A fixed literal, independent of the match.
    Marker(&'static str),
    /// Remove the match.
    Delete,
    /// Surround the match with the delimiter on both sides.
    Wrap(&'static str),
    /// Prefix the match with a backslash.
    Escape,
}

impl Replacement {
    fn render(&self, matched: &str) -> String {
        match self {
            Replacement::Marker(marker) => (*marker).to_string(),
            Replacement::Delete => String::new(),
            Replacement::Wrap(delimiter) => format!("{delimiter}{matched}{delimiter}"),
            Replacement::Escape => format!("\\{matched}"),
        }
    }
}

/// Decides whether a rule participates in a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Always,
    /// Only when `allow_markdown` is false.
    MarkdownDisallowed,
    /// Only when `escape_quotes` is true.
    QuotesEscaped,
    /// Only when `escape_quotes` is false.
    QuotesRemoved,
    /// Only when `strict_mode` is true.
    Strict,
}

impl Stage {
    pub fn applies(&self, options: &SanitizeOptions) -> bool {
        match self {
            Stage::Always => true,
            Stage::MarkdownDisallowed => !options.allow_markdown,
            Stage::QuotesEscaped => options.escape_quotes,
            Stage::QuotesRemoved => !options.escape_quotes,
            Stage::Strict => options.strict_mode,
        }
    }
}

/// Uncompiled description of a single rule.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub name: &'static str,
    pub pattern: String,
    pub replacement: Replacement,
    pub stage: Stage,
    pub case_insensitive: bool,
    /// Lets `.` cross line breaks, so bracketed spans may cover several lines.
    pub dot_matches_new_line: bool,
    /// Matches equal to one of these literals are left as they are.
    pub preserve: &'static [&'static str],
}

impl RuleSpec {
    pub fn new(name: &'static str, pattern: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            name,
            pattern: pattern.into(),
            replacement,
            stage: Stage::Always,
            case_insensitive: false,
            dot_matches_new_line: false,
            preserve: &[],
        }
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn dot_matches_new_line(mut self) -> Self {
        self.dot_matches_new_line = true;
        self
    }

    pub fn preserve(mut self, literals: &'static [&'static str]) -> Self {
        self.preserve = literals;
        self
    }
}

/// A rule with its regex built and ready to apply.
#[derive(Debug)]
pub struct CompiledRule {
    pub regex: Regex,
    pub name: &'static str,
    pub replacement: Replacement,
    pub stage: Stage,
    pub preserve: &'static [&'static str],
}

impl CompiledRule {
    /// Replaces every match in `input`, returning the new text and the number
    /// of matches that were actually rewritten.
    ///
    /// Preserved literals are swapped for private-use placeholders before
    /// matching, so a span can neither end inside one nor be rewritten as one.
    pub fn apply(&self, input: &str) -> (String, usize) {
        if !self.preserve.iter().any(|p| input.contains(*p)) {
            return self.replace(input);
        }
        let Some(placeholders) = pick_placeholders(input, self.preserve.len()) else {
            return self.replace(input);
        };

        let mut shielded = input.to_string();
        for (literal, placeholder) in self.preserve.iter().zip(&placeholders) {
            shielded = shielded.replace(*literal, &placeholder.to_string());
        }
        let (mut output, hits) = self.replace(&shielded);
        for (literal, placeholder) in self.preserve.iter().zip(&placeholders) {
            output = output.replace(*placeholder, literal);
        }
        (output, hits)
    }

    fn replace(&self, input: &str) -> (String, usize) {
        let mut hits = 0usize;
        let output = self.regex.replace_all(input, |caps: &Captures| {
            let matched = &caps[0];
            if self.preserve.iter().any(|p| *p == matched) {
                return matched.to_string();
            }
            hits += 1;
            self.replacement.render(matched)
        });
        (output.into_owned(), hits)
    }
}

/// Picks `count` private-use characters that do not occur in `input`.
fn pick_placeholders(input: &str, count: usize) -> Option<Vec<char>> {
    let picked: Vec<char> = (0xE000u32..=0xF8FF)
        .filter_map(char::from_u32)
        .filter(|c| !input.contains(*c))
        .take(count)
        .collect();
    (picked.len() == count).then_some(picked)
}

/// An ordered collection of compiled rules.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// The rules that run for `options`, in application order.
    pub fn chain<'a>(
        &'a self,
        options: &'a SanitizeOptions,
    ) -> impl Iterator<Item = &'a CompiledRule> + 'a {
        self.rules.iter().filter(move |r| r.stage.applies(options))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

/// Compiles rule specifications, keeping their order.
///
/// Every failing rule is reported; the call only succeeds if all compile.
pub fn compile_rules(specs: Vec<RuleSpec>) -> Result<CompiledRules, PromptGuardError> {
    debug!("Starting compilation of {} rules.", specs.len());

    let mut compiled_rules = Vec::with_capacity(specs.len());
    let mut compilation_errors = Vec::new();

    for spec in specs {
        if spec.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(PromptGuardError::PatternLengthExceeded(
                spec.name.to_string(),
                spec.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&spec.pattern)
            .case_insensitive(spec.case_insensitive)
            .dot_matches_new_line(spec.dot_matches_new_line)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                log::trace!(
                    target: "promptguard_core::sanitizer",
                    "Rule '{}' compiled successfully.",
                    spec.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    name: spec.name,
                    replacement: spec.replacement,
                    stage: spec.stage,
                    preserve: spec.preserve,
                });
            }
            Err(e) => {
                compilation_errors.push(PromptGuardError::RuleCompilationError(spec.name.to_string(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(PromptGuardError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_preserves_order() {
        let rules = compile_rules(vec![
            RuleSpec::new("b", "b", Replacement::Delete),
            RuleSpec::new("a", "a", Replacement::Delete),
        ])
        .unwrap();
        assert_eq!(rules.names(), vec!["b", "a"]);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = compile_rules(vec![
            RuleSpec::new("ok", "x", Replacement::Delete),
            RuleSpec::new("broken", "(unclosed", Replacement::Delete),
        ])
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to compile 1 rule(s)"));
        assert!(msg.contains("broken"));
    }

    #[test]
    fn test_pattern_length_limit() {
        let err = compile_rules(vec![RuleSpec::new("long", "a".repeat(MAX_PATTERN_LENGTH + 1), Replacement::Delete)])
            .unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn test_replacement_policies() {
        let rules = compile_rules(vec![
            RuleSpec::new("marker", "x+", Replacement::Marker("[X]")),
            RuleSpec::new("wrap", "y", Replacement::Wrap("_")),
            RuleSpec::new("escape", "z", Replacement::Escape),
        ])
        .unwrap();
        assert_eq!(rules.get("marker").unwrap().apply("axxxb"), ("a[X]b".to_string(), 1));
        assert_eq!(rules.get("wrap").unwrap().apply("y y"), ("_y_ _y_".to_string(), 2));
        assert_eq!(rules.get("escape").unwrap().apply("z"), ("\\z".to_string(), 1));
    }

    #[test]
    fn test_preserved_literals_are_not_counted() {
        let rules = compile_rules(vec![RuleSpec::new("sq", r"\[.*?\]", Replacement::Marker("[gone]"))
            .preserve(&["[keep]"])])
        .unwrap();
        let (out, hits) = rules.get("sq").unwrap().apply("[keep] [drop]");
        assert_eq!(out, "[keep] [gone]");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_preserved_literals_cannot_close_a_span() {
        let rules = compile_rules(vec![RuleSpec::new("sq", r"\[.*?\]", Replacement::Marker("[gone]"))
            .preserve(&["[keep]"])])
        .unwrap();
        let rule = rules.get("sq").unwrap();
        assert_eq!(rule.apply("[[keep]"), ("[[keep]".to_string(), 0));
        assert_eq!(rule.apply("note [x [keep]"), ("note [x [keep]".to_string(), 0));
        assert_eq!(rule.apply("[a [keep] b] [keep]"), ("[gone] [keep]".to_string(), 1));
    }

    #[test]
    fn test_placeholders_avoid_characters_already_in_input() {
        let rules = compile_rules(vec![RuleSpec::new("sq", r"\[.*?\]", Replacement::Marker("[gone]"))
            .preserve(&["[keep]"])])
        .unwrap();
        let (out, hits) = rules.get("sq").unwrap().apply("\u{E000}[[keep] [x]");
        assert_eq!(out, "\u{E000}[[keep] [gone]");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_stage_conditions() {
        let strict = SanitizeOptions::default();
        let lax = SanitizeOptions::default()
            .with_strict_mode(false)
            .with_allow_markdown(true)
            .with_escape_quotes(false);
        assert!(Stage::Strict.applies(&strict));
        assert!(!Stage::Strict.applies(&lax));
        assert!(Stage::MarkdownDisallowed.applies(&strict));
        assert!(!Stage::MarkdownDisallowed.applies(&lax));
        assert!(Stage::QuotesEscaped.applies(&strict));
        assert!(Stage::QuotesRemoved.applies(&lax));
        assert!(Stage::Always.applies(&lax));
    }
}

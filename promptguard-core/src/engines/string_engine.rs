// promptguard-core/src/engines/string_engine.rs
//! The rule pipeline for a single string.
//!
//! Applies the built-in rules that are active for the configured options,
//! in table order, then truncates to `max_length` characters.
//! License: MIT OR APACHE 2.0

use log::trace;

use crate::config::SanitizeOptions;
use crate::engine::SanitizationEngine;
use crate::markers::TRUNCATION_MARKER;
use crate::report::{log_rule_applied_debug, SanitizeReport};
use crate::sanitizers::compiler::CompiledRules;
use crate::sanitizers::rules::{builtin_rules, TRUNCATION};

#[derive(Debug, Clone, Copy)]
pub struct StringSanitizer {
    options: SanitizeOptions,
    rules: &'static CompiledRules,
}

impl Default for StringSanitizer {
    fn default() -> Self {
        Self::new(SanitizeOptions::default())
    }
}

impl StringSanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        Self {
            options,
            rules: builtin_rules(),
        }
    }

    /// Sanitizes `input`. `None` and the empty string both yield `""`.
    pub fn sanitize(&self, input: Option<&str>) -> String {
        match input {
            Some(text) => self.sanitize_str(text),
            None => String::new(),
        }
    }

    /// Names of the rules this sanitizer applies, in order.
    pub fn rule_chain(&self) -> Vec<&'static str> {
        self.rules.chain(&self.options).map(|r| r.name).collect()
    }
}

impl SanitizationEngine for StringSanitizer {
    fn sanitize_with_report(&self, input: &str) -> (String, SanitizeReport) {
        let mut report = SanitizeReport::default();
        if input.is_empty() {
            return (String::new(), report);
        }
        report.strings_processed = 1;

        let mut sanitized = input.to_string();
        for rule in self.rules.chain(&self.options) {
            let (next, hits) = rule.apply(&sanitized);
            if hits > 0 {
                log_rule_applied_debug(rule.name, hits, &next);
                report.record(rule.name, hits);
            }
            sanitized = next;
        }

        let (sanitized, truncated) = truncate_chars(sanitized, self.options.max_length);
        if truncated {
            trace!("Output truncated to {} characters.", self.options.max_length);
            report.record(TRUNCATION, 1);
            report.truncated = 1;
        }
        (sanitized, report)
    }
}

/// Cuts `s` to `max_chars` characters and appends the truncation marker if
/// anything was removed.
fn truncate_chars(mut s: String, max_chars: usize) -> (String, bool) {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            s.truncate(byte_idx);
            s.push_str(TRUNCATION_MARKER);
            (s, true)
        }
        None => (s, false),
    }
}

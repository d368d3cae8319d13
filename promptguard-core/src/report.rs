//! Reporting structures for sanitization runs.
//!
//! A `SanitizeReport` records which rules rewrote something and how often,
//! whether any string was truncated and how many compound values were
//! collapsed by the depth bound. It also hosts the logging helpers that keep
//! untrusted input out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Whether raw input may appear in debug logs, read once from the environment.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("PROMPTGUARD_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Occurrence count for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

/// What a sanitization run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeReport {
    /// Rules that rewrote at least one match, in first-seen order.
    pub items: Vec<RuleSummaryItem>,
    /// Number of strings cut at `max_length`.
    pub truncated: usize,
    /// Number of sequences or mappings replaced by the nested-object marker.
    pub simplified: usize,
    /// Number of string leaves passed through the string pipeline.
    pub strings_processed: usize,
}

impl SanitizeReport {
    /// Adds `occurrences` hits for `rule_name`. Zero is ignored.
    pub fn record(&mut self, rule_name: &str, occurrences: usize) {
        if occurrences == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.rule_name == rule_name) {
            Some(item) => item.occurrences += occurrences,
            None => self.items.push(RuleSummaryItem {
                rule_name: rule_name.to_string(),
                occurrences,
            }),
        }
    }

    pub fn occurrences(&self, rule_name: &str) -> usize {
        self.items
            .iter()
            .find(|i| i.rule_name == rule_name)
            .map_or(0, |i| i.occurrences)
    }

    pub fn total_occurrences(&self) -> usize {
        self.items.iter().map(|i| i.occurrences).sum()
    }

    /// True when nothing was rewritten, truncated or simplified.
    pub fn is_clean(&self) -> bool {
        self.items.is_empty() && self.truncated == 0 && self.simplified == 0
    }

    pub fn merge(&mut self, other: SanitizeReport) {
        for item in other.items {
            self.record(&item.rule_name, item.occurrences);
        }
        self.truncated += other.truncated;
        self.simplified += other.simplified;
        self.strings_processed += other.strings_processed;
    }
}

/// Replaces content with a length hint.
pub fn redact_content(s: &str) -> String {
    format!("[CONTENT: {} chars]", s.chars().count())
}

/// The form of `content` that is safe to write to debug logs.
pub fn loggable_content(content: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_content(content)
    }
}

pub fn log_rule_applied_debug(rule_name: &str, occurrences: usize, after: &str) {
    debug!(
        "Rule '{}' rewrote {} match(es); text is now {}",
        rule_name,
        occurrences,
        loggable_content(after)
    );
}

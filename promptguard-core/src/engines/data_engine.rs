// promptguard-core/src/engines/data_engine.rs
//! Depth-bounded sanitization of structured values.
//!
//! `DataSanitizer` walks a `Value` depth-first and rebuilds it with every
//! string leaf passed through a `SanitizationEngine`. The depth counter is an
//! explicit parameter starting at 0; any sequence or mapping met at a depth
//! of `max_depth` or more is replaced by the nested-object marker, while
//! scalars met there are returned untouched.
//!
//! There is no cycle detection. Owned `Value` trees cannot be cyclic, and
//! for any other input source the depth bound alone guarantees termination.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::engine::SanitizationEngine;
use crate::markers::NESTED_MARKER;
use crate::report::SanitizeReport;
use crate::value::{MappingBuilder, Value};

/// Characters removed from mapping keys.
pub const KEY_STRIP_CHARS: &[char] = &['<', '>', '{', '}', '[', ']'];

pub struct DataSanitizer<'e> {
    engine: &'e dyn SanitizationEngine,
    max_depth: usize,
}

impl<'e> DataSanitizer<'e> {
    pub fn new(engine: &'e dyn SanitizationEngine, max_depth: usize) -> Self {
        Self { engine, max_depth }
    }

    /// A sanitizer with the default depth bound of 5.
    pub fn with_default_depth(engine: &'e dyn SanitizationEngine) -> Self {
        Self::new(engine, DEFAULT_MAX_DEPTH)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn sanitize(&self, data: &Value) -> Value {
        self.sanitize_with_report(data).0
    }

    pub fn sanitize_with_report(&self, data: &Value) -> (Value, SanitizeReport) {
        let mut report = SanitizeReport::default();
        let out = self.walk(data, 0, &mut report);
        debug!(
            "Sanitized value: {} string(s), {} rewrite(s), {} simplified, {} truncated.",
            report.strings_processed,
            report.total_occurrences(),
            report.simplified,
            report.truncated
        );
        (out, report)
    }

    fn walk(&self, data: &Value, depth: usize, report: &mut SanitizeReport) -> Value {
        if depth >= self.max_depth {
            if data.is_compound() {
                report.simplified += 1;
                return Value::String(NESTED_MARKER.to_string());
            }
            return data.clone();
        }

        match data {
            Value::Null => Value::Null,
            Value::String(s) => {
                let (sanitized, leaf_report) = self.engine.sanitize_with_report(s);
                report.merge(leaf_report);
                Value::String(sanitized)
            }
            Value::Bool(_) | Value::Number(_) => data.clone(),
            Value::Sequence(items) => {
                Value::Sequence(items.iter().map(|item| self.walk(item, depth + 1, report)).collect())
            }
            Value::Mapping(entries) => {
                let mut out = MappingBuilder::with_capacity(entries.len());
                for (key, value) in entries {
                    let safe_value = self.walk(value, depth + 1, report);
                    out.insert(clean_key(key), safe_value);
                }
                out.finish()
            }
            Value::Other(text) => Value::String(text.clone()),
        }
    }
}

/// Strips angle, curly and square bracket characters from a mapping key.
pub fn clean_key(key: &str) -> String {
    key.chars().filter(|c| !KEY_STRIP_CHARS.contains(c)).collect()
}

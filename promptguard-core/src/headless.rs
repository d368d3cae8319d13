// promptguard-core/src/headless.rs
//! One-shot convenience wrappers around the engines.
//!
//! These are the entry points most callers want: build the engine, run it
//! once, return the result.

use crate::config::{SanitizeOptions, DEFAULT_MAX_DEPTH};
use crate::engine::SanitizationEngine;
use crate::engines::data_engine::DataSanitizer;
use crate::engines::string_engine::StringSanitizer;
use crate::report::SanitizeReport;
use crate::value::Value;

/// Sanitizes a single string. `None` and `""` yield `""`.
pub fn sanitize_text(input: Option<&str>, options: &SanitizeOptions) -> String {
    StringSanitizer::new(*options).sanitize(input)
}

/// Sanitizes a single string and reports which rules fired.
pub fn sanitize_text_with_report(input: &str, options: &SanitizeOptions) -> (String, SanitizeReport) {
    StringSanitizer::new(*options).sanitize_with_report(input)
}

/// Sanitizes every string leaf of `data`, collapsing compounds at `max_depth`.
pub fn sanitize_value(data: &Value, options: &SanitizeOptions, max_depth: usize) -> Value {
    let engine = StringSanitizer::new(*options);
    DataSanitizer::new(&engine, max_depth).sanitize(data)
}

pub fn sanitize_value_with_report(
    data: &Value,
    options: &SanitizeOptions,
    max_depth: usize,
) -> (Value, SanitizeReport) {
    let engine = StringSanitizer::new(*options);
    DataSanitizer::new(&engine, max_depth).sanitize_with_report(data)
}

/// [`sanitize_value`] for `serde_json` documents.
pub fn sanitize_json(data: &serde_json::Value, options: &SanitizeOptions, max_depth: usize) -> serde_json::Value {
    sanitize_value(&Value::from(data), options, max_depth).into()
}

/// Sanitizes an API payload before it is handed to a model: strict mode,
/// markdown disallowed, strings capped at 200 characters, default depth.
pub fn safe_api_response(api_data: &serde_json::Value) -> serde_json::Value {
    sanitize_json(api_data, &SanitizeOptions::api_response(), DEFAULT_MAX_DEPTH)
}

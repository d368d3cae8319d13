//! Configuration management for `promptguard-core`.
//!
//! This module defines the per-call `SanitizeOptions` and the on-disk
//! `GuardConfig` that wraps them together with the recursion depth bound.
//! YAML files are read with `serde_yml`; every field is optional and falls
//! back to the documented default.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::PromptGuardError;

/// Default `max_length` for sanitized strings.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Default recursion bound for structured data.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// `max_length` used by [`SanitizeOptions::api_response`].
pub const API_RESPONSE_MAX_LENGTH: usize = 200;

/// Options for one sanitization call.
///
/// Field names also accept the camelCase spelling (`maxLength`, `strictMode`,
/// ...) when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Strings longer than this many characters are truncated and get `...` appended.
    #[serde(alias = "maxLength")]
    pub max_length: usize,
    /// Enables control-character stripping, punctuation normalization and link removal.
    #[serde(alias = "strictMode")]
    pub strict_mode: bool,
    /// When false, code fences and inline code become placeholder markers.
    #[serde(alias = "allowMarkdown")]
    pub allow_markdown: bool,
    /// When true quotes are backslash-escaped, otherwise they are deleted.
    #[serde(alias = "escapeQuotes")]
    pub escape_quotes: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            strict_mode: true,
            allow_markdown: false,
            escape_quotes: true,
        }
    }
}

impl SanitizeOptions {
    /// Preset for wrapping third-party API payloads before they reach a prompt.
    pub fn api_response() -> Self {
        Self {
            max_length: API_RESPONSE_MAX_LENGTH,
            strict_mode: true,
            allow_markdown: false,
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn with_allow_markdown(mut self, allow_markdown: bool) -> Self {
        self.allow_markdown = allow_markdown;
        self
    }

    pub fn with_escape_quotes(mut self, escape_quotes: bool) -> Self {
        self.escape_quotes = escape_quotes;
        self
    }

    /// Rejects options that cannot be honored.
    pub fn validate(&self) -> Result<(), PromptGuardError> {
        if self.max_length == 0 {
            return Err(PromptGuardError::InvalidConfig(
                "`max_length` must be a positive integer.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Options applied to every string leaf.
    pub sanitize: SanitizeOptions,
    /// Depth at which nested sequences and mappings are collapsed.
    #[serde(alias = "maxDepth")]
    pub max_depth: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            sanitize: SanitizeOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GuardConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Parses and validates a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, PromptGuardError> {
        // An empty document deserializes to `null`, which means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GuardConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The commented default configuration written by `promptguard --init`.
    pub fn default_yaml() -> &'static str {
        include_str!("../config/default_config.yaml")
    }

    /// Parses the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        Self::from_yaml_str(Self::default_yaml()).context("Failed to parse default configuration")
    }

    pub fn validate(&self) -> Result<(), PromptGuardError> {
        self.sanitize.validate()?;
        if self.max_depth == 0 {
            return Err(PromptGuardError::InvalidConfig(
                "`max_depth` must be a positive integer.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SanitizeOptions::default();
        assert_eq!(opts.max_length, 500);
        assert!(opts.strict_mode);
        assert!(!opts.allow_markdown);
        assert!(opts.escape_quotes);
    }

    #[test]
    fn test_api_response_preset() {
        let opts = SanitizeOptions::api_response();
        assert_eq!(opts.max_length, 200);
        assert!(opts.strict_mode);
        assert!(!opts.allow_markdown);
        assert!(opts.escape_quotes);
    }

    #[test]
    fn test_embedded_default_matches_code_defaults() -> Result<()> {
        assert_eq!(GuardConfig::load_default()?, GuardConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_yaml_fills_defaults() -> Result<()> {
        let config = GuardConfig::from_yaml_str("sanitize:\n  max_length: 42\n")?;
        assert_eq!(config.sanitize.max_length, 42);
        assert!(config.sanitize.strict_mode);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        Ok(())
    }

    #[test]
    fn test_camel_case_aliases() -> Result<()> {
        let config = GuardConfig::from_yaml_str(
            "sanitize:\n  maxLength: 10\n  strictMode: false\n  escapeQuotes: false\nmaxDepth: 2\n",
        )?;
        assert_eq!(config.sanitize.max_length, 10);
        assert!(!config.sanitize.strict_mode);
        assert!(!config.sanitize.escape_quotes);
        assert_eq!(config.max_depth, 2);
        Ok(())
    }

    #[test]
    fn test_zero_values_rejected() {
        let err = GuardConfig::from_yaml_str("sanitize:\n  max_length: 0\n").unwrap_err();
        assert!(matches!(err, PromptGuardError::InvalidConfig(_)));

        let err = GuardConfig::from_yaml_str("max_depth: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn test_empty_document_is_default() -> Result<()> {
        assert_eq!(GuardConfig::from_yaml_str("  \n")?, GuardConfig::default());
        Ok(())
    }
}

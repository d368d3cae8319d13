//! errors.rs - Custom error types for the promptguard-core library.
//!
//! The sanitization operations themselves are total and never return an
//! error. This enum covers the fallible edges around them: compiling rule
//! tables and loading or validating configuration.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised by `promptguard-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PromptGuardError {
    #[error("Failed to compile sanitization rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(#[from] serde_yml::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

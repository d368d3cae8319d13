// promptguard-core/src/engine.rs
//! Defines the core `SanitizationEngine` trait.
//!
//! The trait is the seam between the structural walker (`DataSanitizer`) and
//! whatever rewrites individual strings. The built-in implementation is
//! `StringSanitizer`; callers can supply their own to change string policy
//! while keeping the depth-bounded traversal.
//!
//! License: MIT OR APACHE 2.0

use crate::report::SanitizeReport;

/// A string-level sanitizer.
///
/// Implementations must be total: any input produces an output and no call
/// panics or fails.
pub trait SanitizationEngine: Send + Sync {
    /// Sanitizes a single string.
    fn sanitize_str(&self, input: &str) -> String {
        self.sanitize_with_report(input).0
    }

    /// Sanitizes a single string and reports which rules fired.
    fn sanitize_with_report(&self, input: &str) -> (String, SanitizeReport);
}

//! Fixed placeholder literals written into sanitized output.
//!
//! Every destructive rule replaces what it matched with one of these, so a
//! caller can detect after the fact that content was removed or simplified.

/// Replaces a fenced (triple-backtick) code block.
pub const CODE_BLOCK_MARKER: &str = "[code block removed]";

/// Replaces an inline code span.
pub const INLINE_CODE_MARKER: &str = "[code removed]";

/// Replaces a curly, square or parenthesized span.
pub const FILTERED_MARKER: &str = "[content filtered]";

/// Replaces an `http(s)://` token in strict mode.
pub const LINK_MARKER: &str = "[link removed]";

/// Replaces a JSON property name together with its colon.
pub const PROPERTY_MARKER: &str = "【property】:";

/// Replaces an empty JSON array or object literal.
pub const EMPTY_MARKER: &str = "【empty】";

/// Appended to a string that was cut at `max_length`.
pub const TRUNCATION_MARKER: &str = "...";

/// Stands in for a sequence or mapping found at or beyond the depth bound.
pub const NESTED_MARKER: &str = "[nested object simplified]";

pub const ELLIPSIS: &str = "\u{2026}";
pub const EM_DASH: &str = "\u{2014}";
pub const DOUBLE_EQUALS: &str = "==";

/// Markers the bracket rules must leave intact when they see one verbatim.
pub const BRACKETED_MARKERS: &[&str] = &[CODE_BLOCK_MARKER, INLINE_CODE_MARKER, FILTERED_MARKER];

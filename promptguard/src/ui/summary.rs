//! Human-readable rendering of a `SanitizeReport` and status messages.
//!
//! Everything here writes to a caller-supplied writer (stderr in practice)
//! and only emits ANSI colors when asked to.

use owo_colors::OwoColorize;
use promptguard_core::SanitizeReport;
use std::io::{self, Write};

/// Prints the per-rule summary of a sanitization run.
pub fn print_summary<W: Write>(report: &SanitizeReport, writer: &mut W, enable_colors: bool) -> io::Result<()> {
    let header = "Sanitization Summary:";
    if enable_colors {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    if report.is_clean() {
        writeln!(writer, "  No content was rewritten.")?;
        return Ok(());
    }

    for item in &report.items {
        let count = format!("{} occurrence(s)", item.occurrences);
        if enable_colors {
            writeln!(writer, "  {} ({})", item.rule_name.cyan(), count.magenta())?;
        } else {
            writeln!(writer, "  {} ({})", item.rule_name, count)?;
        }
    }

    if report.simplified > 0 {
        writeln!(writer, "  {} nested value(s) simplified", report.simplified)?;
    }
    writeln!(writer, "  {} string(s) processed", report.strings_processed)?;
    Ok(())
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    if enable_colors {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, enable_colors: bool) -> io::Result<()> {
    if enable_colors {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report() {
        let mut out = Vec::new();
        print_summary(&SanitizeReport::default(), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Sanitization Summary:\n  No content was rewritten.\n");
    }

    #[test]
    fn test_report_lists_rules_without_colors() {
        let mut report = SanitizeReport::default();
        report.record("url", 2);
        report.simplified = 1;
        report.strings_processed = 3;
        let mut out = Vec::new();
        print_summary(&report, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  url (2 occurrence(s))\n"));
        assert!(text.contains("1 nested value(s) simplified"));
        assert!(text.contains("3 string(s) processed"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_colors_emit_ansi() {
        let mut report = SanitizeReport::default();
        report.record("html_tag", 1);
        let mut out = Vec::new();
        print_summary(&report, &mut out, true).unwrap();
        assert!(String::from_utf8(out).unwrap().contains('\u{1b}'));
    }
}

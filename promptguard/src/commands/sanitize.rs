//! The default command: sanitize text or a JSON document.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use promptguard_core::{
    report::loggable_content, sanitize_text_with_report, sanitize_value_with_report, GuardConfig, SanitizeReport,
    Value,
};

use crate::ui::summary;

/// Options for one sanitize run.
pub struct SanitizeRequest {
    pub input: String,
    pub json: bool,
    pub output_path: Option<PathBuf>,
    pub summary: bool,
    pub quiet: bool,
}

/// Reads the input text from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("Failed to read input file {}", p.display())),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("No input provided. Pipe text into promptguard or pass a FILE (see --help).");
            }
            let mut buffer = String::new();
            stdin
                .lock()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Sanitizes `request.input` with `config`, writes the result and returns
/// the report.
pub fn run_sanitize(config: &GuardConfig, request: &SanitizeRequest) -> Result<SanitizeReport> {
    info!("Starting sanitize operation.");
    debug!("Input received: {}", loggable_content(&request.input));

    let (rendered, report) = if request.json {
        let parsed: serde_json::Value =
            serde_json::from_str(&request.input).context("Input is not a valid JSON document")?;
        let (sanitized, report) = sanitize_value_with_report(&Value::from(parsed), &config.sanitize, config.max_depth);
        let rendered = serde_json::to_string_pretty(&serde_json::Value::from(sanitized))
            .context("Failed to serialize sanitized JSON")?;
        (rendered, report)
    } else {
        // The line terminator a pipe adds is not part of the text.
        let text = strip_line_terminator(&request.input);
        sanitize_text_with_report(text, &config.sanitize)
    };

    write_output(request.output_path.as_deref(), &rendered)?;

    if request.summary && !request.quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        summary::print_summary(&report, &mut stderr.lock(), supports_color)?;
    }

    info!("Sanitize operation completed.");
    Ok(report)
}

fn strip_line_terminator(input: &str) -> &str {
    let input = input.strip_suffix('\n').unwrap_or(input);
    input.strip_suffix('\r').unwrap_or(input)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            let mut file =
                fs::File::create(p).with_context(|| format!("Failed to create output file: {}", p.display()))?;
            writeln!(file, "{}", content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", content)?;
        }
    }
    Ok(())
}

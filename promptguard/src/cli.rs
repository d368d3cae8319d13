//! This file defines the command-line interface (CLI) for the promptguard
//! application: its flags, and how they are layered over a `GuardConfig`.
//! License: MIT OR Apache-2.0

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use promptguard_core::GuardConfig;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "promptguard",
    author = "PromptGuard Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Neutralize prompt-injection constructs in untrusted text",
    long_about = "promptguard reads untrusted text (or a JSON document with --json) from a file or stdin and writes a sanitized copy that is safer to embed into a language-model prompt. Markup, code, bracketed blocks, role keywords, quotes and links are neutralized, and output strings are truncated to a configurable length.",
    disable_version_flag = true,
    after_help = "Examples:\n  promptguard --init\n  promptguard --version\n  curl -s https://api.example.com/item | promptguard --json"
)]
pub struct Cli {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(value_name = "FILE", help = "Read input from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'i', help = "Write a default configuration file and exit.")]
    pub init: bool,

    #[arg(long, requires = "init", help = "Overwrite an existing configuration file with --init.")]
    pub force: bool,

    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Show version information.")]
    pub version: (),

    /// Path to a configuration file (YAML).
    #[arg(
        long = "config",
        value_name = "FILE",
        env = "PROMPTGUARD_CONFIG",
        help = "Path to a YAML configuration file."
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Treat input as a JSON document and sanitize every string in it.")]
    pub json: bool,

    #[arg(long = "max-length", value_name = "N", value_parser = parse_positive, help = "Truncate sanitized strings to N characters.")]
    pub max_length: Option<usize>,

    #[arg(long = "max-depth", value_name = "N", value_parser = parse_positive, help = "Collapse JSON nested N levels deep.")]
    pub max_depth: Option<usize>,

    #[arg(long = "no-strict", help = "Disable strict mode (control characters, links, punctuation runs).")]
    pub no_strict: bool,

    #[arg(long = "allow-markdown", help = "Keep code fences and inline code.")]
    pub allow_markdown: bool,

    #[arg(long = "strip-quotes", help = "Delete quote characters instead of escaping them.")]
    pub strip_quotes: bool,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print a summary of the rules that fired to stderr.")]
    pub summary: bool,

    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// Layers the command-line flags over `config`. Flags only ever override.
    pub fn apply_overrides(&self, mut config: GuardConfig) -> GuardConfig {
        if let Some(max_length) = self.max_length {
            config.sanitize.max_length = max_length;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.no_strict {
            config.sanitize.strict_mode = false;
        }
        if self.allow_markdown {
            config.sanitize.allow_markdown = true;
        }
        if self.strip_quotes {
            config.sanitize.escape_quotes = false;
        }
        config
    }
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

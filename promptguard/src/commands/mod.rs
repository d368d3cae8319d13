//! Command implementations and the dispatcher that picks one from the
//! parsed CLI.

pub mod init;
pub mod sanitize;

use anyhow::Result;
use is_terminal::IsTerminal;
use log::debug;
use std::io;

use promptguard_core::GuardConfig;

use crate::cli::Cli;
use crate::ui::summary::{print_info_message, print_warn_message};
use sanitize::{read_input, run_sanitize, SanitizeRequest};

/// Loads the configuration the CLI should run with.
///
/// `--config` (or `PROMPTGUARD_CONFIG`) wins; otherwise the per-user file
/// written by `--init` is used if present; otherwise built-in defaults.
/// Command-line flags are applied last.
pub fn resolve_config(cli: &Cli) -> Result<GuardConfig> {
    let base = match &cli.config {
        Some(path) => GuardConfig::load_from_file(path)?,
        None => match init::default_config_path().filter(|p| p.is_file()) {
            Some(path) => GuardConfig::load_from_file(&path)?,
            None => {
                debug!("No configuration file found; using built-in defaults.");
                GuardConfig::default()
            }
        },
    };
    let config = cli.apply_overrides(base);
    config.validate()?;
    Ok(config)
}

/// Runs whatever the parsed command line asks for.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stderr_supports_color = io::stderr().is_terminal();

    if cli.init {
        let path = init::run_init(cli.config.as_deref(), cli.force)?;
        if !cli.quiet {
            print_info_message(
                &mut io::stderr(),
                &format!("Wrote default configuration to {}", path.display()),
                stderr_supports_color,
            )?;
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    if cli.max_depth.is_some() && !cli.json && !cli.quiet {
        print_warn_message(
            &mut io::stderr(),
            "--max-depth only affects --json input.",
            stderr_supports_color,
        )?;
    }

    let input = read_input(cli.input_file.as_deref())?;
    let request = SanitizeRequest {
        input,
        json: cli.json,
        output_path: cli.output.clone(),
        summary: cli.summary,
        quiet: cli.quiet,
    };
    run_sanitize(&config, &request)?;
    Ok(())
}

//! `promptguard --init`: writes the default configuration file.

use anyhow::{bail, Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use promptguard_core::GuardConfig;

/// `<config_dir>/promptguard/config.yaml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptguard").join("config.yaml"))
}

/// Writes the commented default configuration to `target`, or to
/// [`default_config_path`] when no target is given.
///
/// An existing file is only replaced when `force` is set. Returns the path
/// that was written.
pub fn run_init(target: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match target {
        Some(p) => p.to_path_buf(),
        None => default_config_path().context("Could not determine a configuration directory for this platform")?,
    };

    if path.exists() && !force {
        bail!(
            "Configuration file {} already exists. Re-run with --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(&path, GuardConfig::default_yaml())
        .with_context(|| format!("Failed to write configuration file {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());
    Ok(path)
}

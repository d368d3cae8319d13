// promptguard/src/lib.rs
//! # PromptGuard CLI
//!
//! Command-line front end for `promptguard-core`: argument parsing, logging
//! setup, and the `sanitize` and `--init` commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::dispatch;

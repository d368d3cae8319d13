// promptguard/src/main.rs
//! PromptGuard entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use promptguard::cli::Cli;
use promptguard::{dispatch, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    dispatch(cli)
}

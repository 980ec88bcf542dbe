#![forbid(unsafe_code)]

//! Content access CLI
//!
//! Loads a site configuration and evaluates access decisions against it.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use content_access::SiteConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing; `log` records from the library crates are bridged in.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run(args);
    commands::exit_code(result, &mut std::io::stderr())
}

fn run(args: Args) -> Result<ExitCode> {
    let path = SiteConfig::resolve_config_path(args.config.as_deref())
        .context("could not determine a configuration file path for this platform")?;
    let config = SiteConfig::load(&path)
        .with_context(|| format!("failed to load site configuration {}", path.display()))?;

    let mut stdout = std::io::stdout().lock();
    commands::handle_command(&config, args.command, &mut stdout)
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use content_access_core::AccessOperation;

/// Content access - evaluate per-item access control decisions
#[derive(Parser, Debug)]
#[command(name = "content-access")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Site configuration file path
    #[arg(short, long, env = "CONTENT_ACCESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide whether an actor may manage an item's access settings
    Check {
        /// Actor ID
        #[arg(short, long)]
        actor: String,
        /// Content item ID
        #[arg(short, long)]
        item: String,
    },
    /// Show a role's human-readable label
    Role {
        /// Role machine name
        id: String,
    },
    /// List the roles granted an operation on an item
    Grants {
        /// Actor ID
        #[arg(short, long)]
        actor: String,
        /// Content item ID
        #[arg(short, long)]
        item: String,
        /// Operation name (view, view_own, update, update_own, delete, delete_own)
        #[arg(short, long, default_value = "view", value_parser = parse_operation)]
        operation: AccessOperation,
    },
}

fn parse_operation(s: &str) -> Result<AccessOperation, String> {
    s.parse().map_err(|e: content_access_core::Error| e.to_string())
}

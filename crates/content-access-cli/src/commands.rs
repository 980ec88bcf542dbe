//! Handler functions for CLI commands.
//!
//! Each handler writes its report to the given writer and returns the
//! process exit code, so the handlers can be tested without a terminal.
//!
//! Exit codes: `0` granted / found, `1` denied / not found, `2` error.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use content_access::SiteConfig;
use content_access_core::{AccessOperation, RoleId};

use crate::cli::Command;

/// Exit status for a denied decision or an unknown role.
pub const EXIT_DENIED: u8 = 1;

/// Exit status for any failure to evaluate (bad config, unknown actor, ...).
pub const EXIT_ERROR: u8 = 2;

/// Turn a command result into the process exit code, reporting errors to `err_out`.
pub fn exit_code(result: Result<ExitCode>, err_out: &mut impl Write) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            let _ = writeln!(err_out, "error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Dispatch a parsed command against a loaded site configuration.
pub fn handle_command(
    config: &SiteConfig,
    command: Command,
    out: &mut impl Write,
) -> Result<ExitCode> {
    match command {
        Command::Check { actor, item } => cmd_check(config, &actor, &item, out),
        Command::Role { id } => cmd_role(config, &id, out),
        Command::Grants {
            actor,
            item,
            operation,
        } => cmd_grants(config, &actor, &item, operation, out),
    }
}

/// Print whether `actor` may manage the access settings of `item`.
pub fn cmd_check(
    config: &SiteConfig,
    actor: &str,
    item: &str,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let engine = config.engine()?;
    let item = config.item(item)?;
    let actor = config.actor(actor)?;

    let decision = engine.check_decision(&item, &actor);
    tracing::debug!(
        item = %item.id(),
        actor = %actor.id(),
        reason = decision.reason(),
        "checked access"
    );
    writeln!(out, "{decision}")?;

    Ok(if decision.is_granted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DENIED)
    })
}

/// Print the label of a role.
pub fn cmd_role(config: &SiteConfig, id: &str, out: &mut impl Write) -> Result<ExitCode> {
    let engine = config.engine()?;
    match engine.resolve_role_label(&RoleId::new(id)) {
        Some(label) => {
            writeln!(out, "{label}")?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            writeln!(out, "not found")?;
            Ok(ExitCode::from(EXIT_DENIED))
        }
    }
}

/// Print the roles granted `operation` on `item`, one per line.
pub fn cmd_grants(
    config: &SiteConfig,
    actor: &str,
    item: &str,
    operation: AccessOperation,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let engine = config.engine()?;
    let item = config.item(item)?;
    let actor = config.actor(actor)?;

    let Some(grants) = engine.granted_roles(&item, &actor, operation) else {
        writeln!(out, "denied")?;
        return Ok(ExitCode::from(EXIT_DENIED));
    };

    writeln!(out, "{}:", operation.label())?;
    for grant in grants {
        match grant.label {
            Some(label) => writeln!(out, "  {} ({label})", grant.role_id)?,
            None => writeln!(out, "  {} (unknown role)", grant.role_id)?,
        }
    }
    Ok(ExitCode::SUCCESS)
}

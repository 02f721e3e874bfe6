//! Process, quota and disk-usage handlers

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::platform::FailureKind;
use crate::tokenizer::tokenize;

const QUOTA_UNSUPPORTED: &str = "This system does not support quotas";

/// `ps [args...]`
pub(super) fn process_list(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let args = tokenize(raw);
    let command = ctx.toolchain.system.process_list(&args);
    let result = ctx.run_checked("ps", command, FailureKind::CommandFailed)?;
    Ok(Outcome::Output(result.combined_output))
}

/// `quotacheck [args...]`
pub(super) fn quota(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let args = tokenize(raw);
    let command = ctx.toolchain.system.quota(&args);
    let result = ctx.run(command)?;

    if result.combined_output.contains(QUOTA_UNSUPPORTED) {
        return Ok(Outcome::message("Quotas are not enabled on this system"));
    }

    if !result.success() {
        return Err(Error::failed(
            "quotacheck",
            result.exit_code,
            &result.combined_output,
        ));
    }

    if result.combined_output.trim().is_empty() {
        return Ok(Outcome::message(
            "No quota information available (quotas may be disabled)",
        ));
    }

    Ok(Outcome::Output(result.combined_output))
}

/// `du [path] [args...]`
pub(super) fn disk_usage(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let args = tokenize(raw);
    let operand = args.iter().find(|arg| !arg.starts_with('-'));
    let target = match operand {
        Some(operand) if ctx.toolchain.system.measures_path() => ctx.resolve(operand)?,
        _ => ctx.session.current_directory().to_path_buf(),
    };

    let command = ctx.toolchain.system.disk_usage(&args, &target);
    let result = ctx.run_checked("du", command, FailureKind::CommandFailed)?;
    Ok(Outcome::Output(result.combined_output))
}

//! Local account handlers

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::platform::FailureKind;
use crate::tokenizer::tokenize;

fn single_name(command: &str, raw: &str, what: &str) -> Result<String> {
    let mut tokens = tokenize(raw);
    match tokens.len() {
        0 => Err(Error::missing(command, what)),
        1 => Ok(tokens.remove(0)),
        _ => Err(Error::TooManyArguments {
            command: command.to_string(),
            limit: format!("exactly one {}", what.trim_start_matches("a ")),
        }),
    }
}

/// `addUser <name>`; failures mean missing privilege on every platform
pub(super) fn add_user(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let name = single_name("addUser", raw, "a username")?;
    let command = ctx.toolchain.accounts.add_user(&name);
    ctx.run_checked("addUser", command, FailureKind::PermissionDenied)?;
    Ok(Outcome::message(format!("Added user: {}", name)))
}

/// `addGroup <name>`
pub(super) fn add_group(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let name = single_name("addGroup", raw, "a group name")?;
    let command = ctx.toolchain.accounts.add_group(&name);
    ctx.run_checked("addGroup", command, FailureKind::PermissionDenied)?;
    Ok(Outcome::message(format!("Added group: {}", name)))
}

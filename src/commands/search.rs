//! Type detection and filesystem search handlers

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::platform::{FailureKind, TypeProbe};
use crate::tokenizer::unquote;

/// Native marker printed by `dir` when nothing matches
const DIR_NOT_FOUND: &str = "File Not Found";

/// `file <path>`
pub(super) fn file_type(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let file = unquote(raw);
    if file.is_empty() {
        return Err(Error::missing("file", "a file"));
    }

    let path = ctx.require_existing(&file)?;
    match ctx.toolchain.search.file_type(&path) {
        TypeProbe::Run(command) => {
            let result = ctx.run_checked("file", command, FailureKind::CommandFailed)?;
            Ok(Outcome::Output(result.combined_output))
        }
        TypeProbe::Detected(kind) => Ok(Outcome::message(format!("{}: {}", file, kind))),
    }
}

/// `find <pattern>`, matched anywhere in the name below the current directory
pub(super) fn find(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let pattern = unquote(raw);
    if pattern.is_empty() {
        return Err(Error::missing("find", "a name pattern"));
    }

    let command = ctx.toolchain.search.find_by_name(&pattern);
    let result = ctx.run(command)?;
    let output = &result.combined_output;

    if output.contains(DIR_NOT_FOUND) || output.trim().is_empty() {
        return Ok(Outcome::message(format!(
            "No files matching '{}' found in {}",
            pattern,
            ctx.session.current_directory().display()
        )));
    }

    if !result.success() {
        return Err(Error::failed("find", result.exit_code, output));
    }

    Ok(Outcome::Output(result.combined_output))
}

/// `locate <pattern>`
pub(super) fn locate(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let pattern = unquote(raw);
    if pattern.is_empty() {
        return Err(Error::missing("locate", "a pattern"));
    }

    let command = ctx.toolchain.search.locate(&pattern);
    let result = ctx.run(command)?;

    if result.combined_output.trim().is_empty() {
        return Ok(Outcome::message(format!(
            "No files matching '{}' found",
            pattern
        )));
    }

    if !result.success() {
        return Err(Error::failed(
            "locate",
            result.exit_code,
            &result.combined_output,
        ));
    }

    Ok(Outcome::Output(result.combined_output))
}

//! Session built-ins: handled without spawning anything

use super::Context;
use crate::error::Result;
use crate::models::Outcome;
use crate::tokenizer::unquote;

/// `cd [dir]`; no argument means the home directory
pub(super) fn change_directory(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let target = unquote(raw);
    let directory = ctx.session.change_directory(&target)?;
    Ok(Outcome::message(format!(
        "Changed directory to: {}",
        directory.display()
    )))
}

/// `pwd`
pub(super) fn print_directory(ctx: &mut Context<'_>) -> Result<Outcome> {
    Ok(Outcome::message(
        ctx.session.current_directory().display().to_string(),
    ))
}

/// `history [query]`
pub(super) fn history(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let history = ctx.session.history();
    if history.is_empty() {
        return Ok(Outcome::message("No commands in history"));
    }

    let query = raw.trim();
    let numbered: Vec<String> = if query.is_empty() {
        history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("{:>3}: {}", index + 1, entry.command_line()))
            .collect()
    } else {
        history
            .search(query)
            .into_iter()
            .map(|(index, entry)| format!("{:>3}: {}", index + 1, entry.command_line()))
            .collect()
    };

    if numbered.is_empty() {
        return Ok(Outcome::message(format!("No commands matching '{}'", query)));
    }

    Ok(Outcome::Output(numbered.join("\n")))
}

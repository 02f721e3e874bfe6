//! Remote download handler

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::platform::FailureKind;
use crate::tokenizer::tokenize;

const DEFAULT_FILENAME: &str = "index.html";

/// Output filename for `url`: its final path segment, or `index.html`
pub fn output_name(url: &str) -> String {
    let without_fragment = url.split(['#', '?']).next().unwrap_or_default();
    let path = match without_fragment.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or(""),
        None => without_fragment,
    };

    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

/// `wget <url> [output]`
pub(super) fn download(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);
    let (url, output) = match tokens.as_slice() {
        [] => return Err(Error::missing("wget", "a URL")),
        [url] => (url, output_name(url)),
        [url, output] => (url, output.clone()),
        _ => {
            return Err(Error::TooManyArguments {
                command: "wget".to_string(),
                limit: "a URL and an optional output file".to_string(),
            })
        }
    };

    let command = ctx.toolchain.network.download(url, &output);
    ctx.run_checked("wget", command, FailureKind::CommandFailed)?;
    Ok(Outcome::message(format!("Downloaded: {} -> {}", url, output)))
}

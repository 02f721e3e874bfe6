//! File handlers: copy, move, content viewing, counting, compression

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::paths::has_trailing_separator;
use crate::platform::FailureKind;
use crate::tokenizer::{tokenize, unquote};
use std::fs;

const DEFAULT_HEAD_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transfer {
    Copy,
    Move,
}

impl Transfer {
    fn name(&self) -> &'static str {
        match self {
            Transfer::Copy => "cp",
            Transfer::Move => "mv",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Transfer::Copy => "Copied",
            Transfer::Move => "Moved",
        }
    }
}

/// `cp`/`mv <source> <destination>`
pub(super) fn transfer(ctx: &mut Context<'_>, raw: &str, transfer: Transfer) -> Result<Outcome> {
    let name = transfer.name();
    let tokens = tokenize(raw);
    let (source_raw, destination_raw) = match tokens.as_slice() {
        [source, destination] => (source, destination),
        [_, _, ..] => {
            return Err(Error::TooManyArguments {
                command: name.to_string(),
                limit: "exactly a source and a destination".to_string(),
            })
        }
        _ => return Err(Error::missing(name, "a source and a destination")),
    };

    let source = ctx.resolve(source_raw)?;
    if !source.exists() {
        return Err(Error::SourceNotFound(source_raw.clone()));
    }

    let destination = ctx.resolve(destination_raw)?;
    if has_trailing_separator(destination_raw) && !destination.exists() {
        debug!("Creating destination directory {}", destination.display());
        fs::create_dir_all(&destination)?;
    }

    let files = &ctx.toolchain.files;
    let command = match transfer {
        Transfer::Copy => files.copy(&source, &destination, source.is_dir()),
        Transfer::Move => files.move_path(&source, &destination),
    };
    ctx.run_checked(name, command, FailureKind::CommandFailed)?;

    Ok(Outcome::message(format!(
        "{} successfully: {} → {}",
        transfer.verb(),
        source_raw,
        destination_raw
    )))
}

/// `touch <file>`
pub(super) fn touch(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let target = unquote(raw);
    if target.is_empty() {
        return Err(Error::missing("touch", "a filename"));
    }

    let path = ctx.resolve(&target)?;
    let existed = path.exists();

    match ctx.toolchain.files.touch(&path) {
        Some(command) => {
            ctx.run_checked("touch", command, FailureKind::CommandFailed)?;
        }
        None if !existed => {
            fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)?;
        }
        None => {}
    }

    Ok(Outcome::message(if existed {
        format!("File already exists: {}", path.display())
    } else {
        format!("Created empty file: {}", path.display())
    }))
}

/// `cat <file>...`; every file is checked before anything runs
pub(super) fn concatenate(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return Err(Error::missing("cat", "at least one file"));
    }

    let paths = tokens
        .iter()
        .map(|token| ctx.require_existing(token))
        .collect::<Result<Vec<_>>>()?;

    let mut output = String::new();
    for command in ctx.toolchain.files.concatenate(&paths) {
        let result = ctx.run_checked("cat", command, FailureKind::CommandFailed)?;
        output.push_str(&result.combined_output);
    }

    Ok(Outcome::Output(output))
}

/// `less <file>`
pub(super) fn page(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);
    let file = match tokens.as_slice() {
        [] => return Err(Error::missing("less", "a file")),
        [file] => file,
        _ => {
            return Err(Error::TooManyArguments {
                command: "less".to_string(),
                limit: "exactly one file".to_string(),
            })
        }
    };

    let path = ctx.require_existing(file)?;
    let command = ctx.toolchain.files.page(&path);
    let result = ctx.run_checked("less", command, FailureKind::CommandFailed)?;
    Ok(Outcome::Output(result.combined_output))
}

/// `head [-n <count>] <file>`
pub(super) fn head(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);

    let (count, file) = match tokens.as_slice() {
        [] => return Err(Error::missing("head", "a file")),
        [flag] if flag == "-n" => return Err(Error::missing("head", "a line count after -n")),
        [flag, count, rest @ ..] if flag == "-n" => {
            let count = count.parse::<usize>().map_err(|_| Error::InvalidArgument {
                command: "head".to_string(),
                reason: format!("'{}' is not a valid line count", count),
            })?;
            match rest.first() {
                Some(file) => (count, file),
                None => return Err(Error::missing("head", "a file")),
            }
        }
        [file, ..] => (DEFAULT_HEAD_LINES, file),
    };

    let path = ctx.require_existing(file)?;
    let command = ctx.toolchain.files.head(&path, count);
    let result = ctx.run_checked("head", command, FailureKind::CommandFailed)?;
    Ok(Outcome::Output(result.combined_output))
}

/// `grep <pattern> <file>`
pub(super) fn search_in_file(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);
    let (pattern, file) = match tokens.as_slice() {
        [pattern, file] => (pattern, file),
        [_, _, ..] => {
            return Err(Error::TooManyArguments {
                command: "grep".to_string(),
                limit: "a pattern and one file".to_string(),
            })
        }
        _ => return Err(Error::missing("grep", "a pattern and a file")),
    };

    let path = ctx.require_existing(file)?;
    let command = ctx.toolchain.files.search_in_file(pattern, &path);
    let result = ctx.run(command)?;

    if result.success() {
        return Ok(Outcome::Output(result.combined_output));
    }

    // Exit status 1 without output is the tools' "no lines selected"
    if result.exit_code == 1 && result.combined_output.trim().is_empty() {
        return Ok(Outcome::message(format!(
            "No matches for '{}' in {}",
            pattern, file
        )));
    }

    Err(Error::failed("grep", result.exit_code, &result.combined_output))
}

/// Line, word and character counts of one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl std::ops::AddAssign for TextCounts {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.words += other.words;
        self.chars += other.chars;
    }
}

/// Count lines, words and characters
///
/// Lines are terminated by `\n`, `\r\n` or a lone `\r`. A final line
/// without a terminator still counts, so `"a\nb\nc\n"` and `"a\nb\nc"`
/// both have three lines.
pub fn count_text(content: &str) -> TextCounts {
    let mut lines = 0;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => lines += 1,
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines += 1;
            }
            _ => {}
        }
    }

    if !content.is_empty() && !content.ends_with(['\n', '\r']) {
        lines += 1;
    }

    TextCounts {
        lines,
        words: content.split_whitespace().count(),
        chars: content.chars().count(),
    }
}

fn count_line(counts: &TextCounts, label: &str) -> String {
    format!(
        "{:>7} {:>7} {:>7} {}",
        counts.lines, counts.words, counts.chars, label
    )
}

/// `wc <file>...`, counted in-process
pub(super) fn word_count(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return Err(Error::missing("wc", "at least one file"));
    }

    let paths = tokens
        .iter()
        .map(|token| {
            let path = ctx.require_existing(token)?;
            if !path.is_file() {
                return Err(Error::FileNotFound(token.clone()));
            }
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut lines = Vec::with_capacity(paths.len() + 1);
    let mut total = TextCounts::default();
    for (token, path) in tokens.iter().zip(&paths) {
        let bytes = fs::read(path)?;
        let counts = count_text(&String::from_utf8_lossy(&bytes));
        lines.push(count_line(&counts, token));
        total += counts;
    }

    if paths.len() > 1 {
        lines.push(count_line(&total, "total"));
    }

    Ok(Outcome::Output(lines.join("\n")))
}

/// `gzip <file>`
pub(super) fn compress(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let file = unquote(raw);
    if file.is_empty() {
        return Err(Error::missing("gzip", "a file"));
    }

    let path = ctx.require_existing(&file)?;
    let command = ctx.toolchain.files.compress(&path);
    ctx.run_checked("gzip", command, FailureKind::CommandFailed)?;

    let suffix = ctx.toolchain.files.compressed_suffix().unwrap_or_default();
    Ok(Outcome::message(format!("Compressed: {}{}", file, suffix)))
}

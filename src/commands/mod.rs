//! The portable command vocabulary
//!
//! A command name is parsed once into [`CommandKind`] at the boundary and
//! dispatched with an exhaustive match. Each dedicated handler validates
//! its arguments and the existence of its paths before anything is
//! spawned, then asks the session's toolchain for the native command and
//! decides what a non-zero exit means for that command. Everything outside
//! the vocabulary is forwarded to the native shell.

mod accounts;
mod builtins;
mod files;
mod network;
mod permissions;
mod search;
mod system;

use crate::error::{Error, Result};
use crate::execution::ProcessRunner;
use crate::models::{ExecutionResult, NativeCommand, Outcome};
use crate::platform::{FailureKind, Toolchain};
use crate::session::Session;
use crate::tokenizer::tokenize;
use std::fmt;
use std::path::PathBuf;

pub use files::{count_text, TextCounts};
pub use network::output_name;

/// Every command the engine knows, plus a passthrough for the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    // Session built-ins
    Cd,
    Pwd,
    History,
    Clear,
    // Files
    Touch,
    Copy,
    Move,
    Cat,
    Less,
    Head,
    Grep,
    Wc,
    Gzip,
    // Permissions and ownership
    Chmod,
    Chown,
    Chgrp,
    AccessRights,
    // Accounts
    AddUser,
    AddGroup,
    // System inspection
    Ps,
    Quotacheck,
    Du,
    // Search
    File,
    Find,
    Locate,
    // Network
    Wget,
    /// Forwarded to the native shell under its own name
    Passthrough(String),
}

impl CommandKind {
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyCommand);
        }

        let kind = match name {
            "cd" => CommandKind::Cd,
            "pwd" => CommandKind::Pwd,
            "history" => CommandKind::History,
            "clear" => CommandKind::Clear,
            "touch" => CommandKind::Touch,
            "cp" => CommandKind::Copy,
            "mv" => CommandKind::Move,
            "cat" => CommandKind::Cat,
            "less" => CommandKind::Less,
            "head" => CommandKind::Head,
            "grep" => CommandKind::Grep,
            "wc" => CommandKind::Wc,
            "gzip" => CommandKind::Gzip,
            "chmod" => CommandKind::Chmod,
            "chown" => CommandKind::Chown,
            "chgrp" => CommandKind::Chgrp,
            "ps" => CommandKind::Ps,
            "quotacheck" => CommandKind::Quotacheck,
            "du" => CommandKind::Du,
            "file" => CommandKind::File,
            "find" => CommandKind::Find,
            "locate" => CommandKind::Locate,
            "wget" => CommandKind::Wget,
            other => match other.to_lowercase().as_str() {
                "adduser" => CommandKind::AddUser,
                "addgroup" => CommandKind::AddGroup,
                "accessrights" => CommandKind::AccessRights,
                _ => CommandKind::Passthrough(other.to_string()),
            },
        };
        Ok(kind)
    }

    /// Canonical spelling, used in messages and errors
    pub fn name(&self) -> &str {
        match self {
            CommandKind::Cd => "cd",
            CommandKind::Pwd => "pwd",
            CommandKind::History => "history",
            CommandKind::Clear => "clear",
            CommandKind::Touch => "touch",
            CommandKind::Copy => "cp",
            CommandKind::Move => "mv",
            CommandKind::Cat => "cat",
            CommandKind::Less => "less",
            CommandKind::Head => "head",
            CommandKind::Grep => "grep",
            CommandKind::Wc => "wc",
            CommandKind::Gzip => "gzip",
            CommandKind::Chmod => "chmod",
            CommandKind::Chown => "chown",
            CommandKind::Chgrp => "chgrp",
            CommandKind::AccessRights => "accessrights",
            CommandKind::AddUser => "addUser",
            CommandKind::AddGroup => "addGroup",
            CommandKind::Ps => "ps",
            CommandKind::Quotacheck => "quotacheck",
            CommandKind::Du => "du",
            CommandKind::File => "file",
            CommandKind::Find => "find",
            CommandKind::Locate => "locate",
            CommandKind::Wget => "wget",
            CommandKind::Passthrough(name) => name,
        }
    }

    /// Whether running this command is recorded in the history
    pub fn is_recorded(&self) -> bool {
        !matches!(self, CommandKind::History)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a handler may touch while running one command
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub toolchain: &'a Toolchain,
    pub runner: &'a dyn ProcessRunner,
}

impl Context<'_> {
    /// Resolve a user path against the current directory
    fn resolve(&self, raw: &str) -> Result<PathBuf> {
        self.session.resolve(raw)
    }

    /// Resolve a path that must already exist
    fn require_existing(&self, raw: &str) -> Result<PathBuf> {
        let path = self.resolve(raw)?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::FileNotFound(raw.to_string()))
        }
    }

    /// Run a native command in the current directory
    fn run(&self, command: NativeCommand) -> Result<ExecutionResult> {
        let invocation = command.resolve(self.session.current_directory());
        self.runner.run(&invocation)
    }

    /// Run a native command; a non-zero exit becomes `failure`
    fn run_checked(
        &self,
        name: &str,
        command: NativeCommand,
        failure: FailureKind,
    ) -> Result<ExecutionResult> {
        let result = self.run(command)?;
        if result.success() {
            return Ok(result);
        }

        Err(match failure {
            FailureKind::CommandFailed => {
                Error::failed(name, result.exit_code, &result.combined_output)
            }
            FailureKind::PermissionDenied => Error::denied(name, &result.combined_output),
        })
    }
}

/// Run one command against the session
pub fn execute(kind: &CommandKind, raw_arguments: &str, ctx: &mut Context<'_>) -> Result<Outcome> {
    match kind {
        CommandKind::Cd => builtins::change_directory(ctx, raw_arguments),
        CommandKind::Pwd => builtins::print_directory(ctx),
        CommandKind::History => builtins::history(ctx, raw_arguments),
        CommandKind::Clear => Ok(Outcome::Clear),
        CommandKind::Touch => files::touch(ctx, raw_arguments),
        CommandKind::Copy => files::transfer(ctx, raw_arguments, files::Transfer::Copy),
        CommandKind::Move => files::transfer(ctx, raw_arguments, files::Transfer::Move),
        CommandKind::Cat => files::concatenate(ctx, raw_arguments),
        CommandKind::Less => files::page(ctx, raw_arguments),
        CommandKind::Head => files::head(ctx, raw_arguments),
        CommandKind::Grep => files::search_in_file(ctx, raw_arguments),
        CommandKind::Wc => files::word_count(ctx, raw_arguments),
        CommandKind::Gzip => files::compress(ctx, raw_arguments),
        CommandKind::Chmod => permissions::change_mode(ctx, raw_arguments),
        CommandKind::Chown => permissions::change_owner(ctx, raw_arguments),
        CommandKind::Chgrp => permissions::change_group(ctx, raw_arguments),
        CommandKind::AccessRights => permissions::access_rights(ctx, raw_arguments),
        CommandKind::AddUser => accounts::add_user(ctx, raw_arguments),
        CommandKind::AddGroup => accounts::add_group(ctx, raw_arguments),
        CommandKind::Ps => system::process_list(ctx, raw_arguments),
        CommandKind::Quotacheck => system::quota(ctx, raw_arguments),
        CommandKind::Du => system::disk_usage(ctx, raw_arguments),
        CommandKind::File => search::file_type(ctx, raw_arguments),
        CommandKind::Find => search::find(ctx, raw_arguments),
        CommandKind::Locate => search::locate(ctx, raw_arguments),
        CommandKind::Wget => network::download(ctx, raw_arguments),
        CommandKind::Passthrough(name) => passthrough(ctx, name, raw_arguments),
    }
}

/// Forward a command outside the vocabulary to the native shell
fn passthrough(ctx: &mut Context<'_>, name: &str, raw_arguments: &str) -> Result<Outcome> {
    let args = tokenize(raw_arguments);
    let command = ctx.toolchain.shell.passthrough(name, &args);
    let result = ctx.run_checked(name, command, FailureKind::CommandFailed)?;
    Ok(Outcome::Output(result.combined_output))
}

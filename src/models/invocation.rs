//! Native process invocations and their results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A program plus argument vector, as produced by a platform toolchain
///
/// Toolchains never choose a working directory; the session attaches its
/// current directory when the command is resolved for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl NativeCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument
    pub fn path_arg(self, path: &Path) -> Self {
        let text = path.to_string_lossy().into_owned();
        self.arg(text)
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Bind this command to a working directory
    pub fn resolve(self, working_directory: &Path) -> ResolvedInvocation {
        ResolvedInvocation {
            program_path: self.program,
            argv: self.args,
            working_directory: working_directory.to_path_buf(),
        }
    }
}

impl fmt::Display for NativeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A native command bound to a working directory, ready for the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInvocation {
    pub program_path: String,
    pub argv: Vec<String>,
    pub working_directory: PathBuf,
}

impl ResolvedInvocation {
    /// Program followed by its arguments, for logging and assertions
    pub fn command_line(&self) -> String {
        std::iter::once(self.program_path.as_str())
            .chain(self.argv.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Combined output and exit status of one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Standard output with standard error merged in, in arrival order
    pub combined_output: String,
    /// Exit code, `-1` when the process was terminated by a signal
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn new(combined_output: impl Into<String>, exit_code: i32) -> Self {
        Self {
            combined_output: combined_output.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

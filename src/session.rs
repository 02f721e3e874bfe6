//! Session state
//!
//! Holds the current working directory, the selected platform and the
//! command history. Only the directory-change built-in moves the current
//! directory, and it only ever points at an existing directory.

use crate::error::{Error, Result};
use crate::history::CommandHistory;
use crate::models::{CommandRequest, ExecutedCommand};
use crate::paths::{normalize, PathResolver};
use crate::platform::PlatformKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Session {
    current_directory: PathBuf,
    platform: PlatformKind,
    resolver: PathResolver,
    history: CommandHistory,
}

impl Session {
    /// Start a session in `start`, which must be an existing directory
    ///
    /// A relative `start` is anchored at the process working directory.
    pub fn new(start: PathBuf, home: PathBuf, platform: PlatformKind) -> Result<Self> {
        let start = normalize(&std::path::absolute(&start)?);
        if !start.is_dir() {
            return Err(Error::InvalidPath {
                path: start,
                reason: "Starting directory not found".to_string(),
            });
        }

        Ok(Self {
            current_directory: start,
            platform,
            resolver: PathResolver::new(home),
            history: CommandHistory::new(),
        })
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    pub fn home(&self) -> &Path {
        self.resolver.home()
    }

    /// Resolve a user path against the current directory
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        self.resolver.resolve(path, &self.current_directory)
    }

    /// Move to `target`; the session is unchanged unless it is an existing directory
    pub fn change_directory(&mut self, target: &str) -> Result<&Path> {
        let resolved = self.resolve(target)?;
        if !resolved.is_dir() {
            return Err(Error::InvalidPath {
                path: resolved,
                reason: "Directory not found".to_string(),
            });
        }

        debug!("Changing directory to {}", resolved.display());
        self.current_directory = resolved;
        Ok(&self.current_directory)
    }

    pub fn record(&mut self, request: &CommandRequest) {
        self.history.push(ExecutedCommand::new(request));
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }
}

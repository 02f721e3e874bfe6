//! Test Utilities and Mocks
//!
//! A recording process runner and a scratch-directory fixture shared by the
//! integration tests. Included with `#[path]` from each test crate.

#![allow(dead_code)]

use shellport::error::Result;
use shellport::models::{ExecutionResult, ResolvedInvocation};
use shellport::session::Session;
use shellport::{PlatformKind, ProcessRunner, Shell, Submission};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every invocation and replays scripted results
///
/// Unscripted invocations succeed with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    scripted: Mutex<VecDeque<ExecutionResult>>,
    invocations: Mutex<Vec<ResolvedInvocation>>,
}

impl RecordingRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the result of the next invocation
    pub fn script(&self, output: &str, exit_code: i32) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(ExecutionResult::new(output, exit_code));
    }

    pub fn spawn_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    pub fn invocations(&self) -> Vec<ResolvedInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// `program arg...` of every invocation, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(ResolvedInvocation::command_line)
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &ResolvedInvocation) -> Result<ExecutionResult> {
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(self
            .scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ExecutionResult::new("", 0)))
    }
}

/// A shell rooted in a scratch directory, backed by a recording runner
pub struct Fixture {
    pub dir: TempDir,
    pub shell: Shell,
    pub runner: Arc<RecordingRunner>,
}

impl Fixture {
    pub fn new(platform: PlatformKind) -> Self {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let session = Session::new(
            dir.path().to_path_buf(),
            dir.path().join("home"),
            platform,
        )
        .unwrap();
        let shell = Shell::with_parts(session, runner.clone());
        Self { dir, shell, runner }
    }

    pub fn posix() -> Self {
        Self::new(PlatformKind::Posix)
    }

    pub fn windows() -> Self {
        Self::new(PlatformKind::Windows)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file with `content`, returning its absolute path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn submit(&mut self, command: &str, arguments: &str) -> Submission {
        self.shell.submit(command, arguments)
    }
}

/// `path` as the runner sees it in an argument vector
pub fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

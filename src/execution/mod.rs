//! Native process execution
//!
//! Runs one resolved invocation to completion and hands back its merged
//! output and exit code. Standard output and standard error share a single
//! pipe, so the two streams interleave in the order the child wrote them.
//! Standard input is never attached; interactive programs see end-of-file.

use crate::error::{Error, Result};
use crate::models::{ExecutionResult, ResolvedInvocation};
use std::collections::HashMap;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Something that can run a resolved invocation to completion
///
/// Command handlers only talk to this trait, which lets tests substitute a
/// recording runner for real processes.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, invocation: &ResolvedInvocation) -> Result<ExecutionResult>;
}

/// Runs invocations as real child processes
#[derive(Debug, Clone, Default)]
pub struct NativeRunner {
    /// Kill the child after this long; `None` waits indefinitely
    timeout: Option<Duration>,
    /// Extra environment variables for every child
    env_vars: HashMap<String, String>,
}

impl NativeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set environment variable
    pub fn set_env(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn spawn(&self, invocation: &ResolvedInvocation) -> Result<(Child, std::io::PipeReader)> {
        let spawn_error = |e: std::io::Error| Error::CommandSpawnFailed {
            program: invocation.program_path.clone(),
            reason: e.to_string(),
        };

        let (reader, writer) = std::io::pipe().map_err(spawn_error)?;
        let error_writer = writer.try_clone().map_err(spawn_error)?;

        let mut command = Command::new(&invocation.program_path);
        command
            .args(&invocation.argv)
            .current_dir(&invocation.working_directory)
            .envs(&self.env_vars)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(error_writer);

        let child = command.spawn().map_err(spawn_error)?;

        // The parent's copies of the write end must close, or reads never see EOF
        drop(command);

        Ok((child, reader))
    }

    fn collect(
        &self,
        mut child: Child,
        mut reader: std::io::PipeReader,
        invocation: &ResolvedInvocation,
    ) -> Result<ExecutionResult> {
        let Some(limit) = self.timeout else {
            let mut buffer = Vec::new();
            if let Err(e) = reader.read_to_end(&mut buffer) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Io(e));
            }
            return finish(child, &buffer);
        };

        let (tx, rx) = mpsc::channel();
        // Detached: after a timeout kill, a grandchild still holding the
        // write end keeps this reader blocked until that grandchild exits.
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let result = reader.read_to_end(&mut buffer).map(|_| buffer);
            let _ = tx.send(result);
        });

        match rx.recv_timeout(limit) {
            Ok(Ok(buffer)) => finish(child, &buffer),
            Ok(Err(e)) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(Error::Io(e))
            }
            Err(_) => {
                warn!("Killing '{}' after {:?}", invocation.command_line(), limit);
                let _ = child.kill();
                let _ = child.wait();
                Err(Error::CommandTimeout {
                    program: invocation.program_path.clone(),
                    duration: limit,
                })
            }
        }
    }
}

/// Reap the child once its output is drained
fn finish(mut child: Child, output: &[u8]) -> Result<ExecutionResult> {
    let status = child.wait()?;
    Ok(ExecutionResult::new(
        String::from_utf8_lossy(output),
        status.code().unwrap_or(-1),
    ))
}

impl ProcessRunner for NativeRunner {
    fn run(&self, invocation: &ResolvedInvocation) -> Result<ExecutionResult> {
        let started = Instant::now();
        debug!(
            "Running '{}' in {}",
            invocation.command_line(),
            invocation.working_directory.display()
        );

        let (child, reader) = self.spawn(invocation)?;
        let result = self.collect(child, reader, invocation)?;

        debug!(
            "'{}' exited with {} in {:?}",
            invocation.program_path,
            result.exit_code,
            started.elapsed()
        );
        Ok(result)
    }
}

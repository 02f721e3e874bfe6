//! The engine's single entry point
//!
//! [`Shell`] owns the session, the toolchain selected for it and the
//! process runner. [`Shell::submit`] never fails: every error is turned
//! into a displayable, `Error`-classified [`Submission`].

use crate::classifier::classify;
use crate::commands::{self, CommandKind, Context};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::execution::{NativeRunner, ProcessRunner};
use crate::models::{ClassifiedLine, CommandRequest, LineCategory, Outcome};
use crate::platform::{PlatformKind, Toolchain};
use crate::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything the presentation layer needs to render one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The full result text
    pub display_text: String,
    /// Overall category of the result
    pub category: LineCategory,
    /// `display_text` split into classified lines
    pub lines: Vec<ClassifiedLine>,
    /// The command as typed, for echoing above its output
    pub echo: ClassifiedLine,
    /// The presentation layer should clear its display
    pub clear: bool,
}

impl Submission {
    pub fn is_error(&self) -> bool {
        self.category == LineCategory::Error
    }
}

pub struct Shell {
    session: Session,
    toolchain: Toolchain,
    runner: Arc<dyn ProcessRunner>,
}

impl Shell {
    /// Build a shell that runs real processes, configured by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let platform = config.platform();
        let home = dirs::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .ok_or_else(|| Error::Other("Could not determine home directory".to_string()))?;

        let start = match &config.session.initial_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| home.clone()),
        };

        let mut runner = NativeRunner::new().with_timeout(config.execution.command_timeout());
        for (key, value) in &config.execution.environment {
            runner.set_env(key.clone(), value.clone());
        }

        info!(
            "Starting {} session in {}",
            platform,
            start.display()
        );
        let session = Session::new(start, home, platform)?;
        Ok(Self::with_parts(session, Arc::new(runner)))
    }

    /// Build a shell from an existing session and runner
    pub fn with_parts(session: Session, runner: Arc<dyn ProcessRunner>) -> Self {
        let toolchain = Toolchain::for_platform(session.platform());
        Self {
            session,
            toolchain,
            runner,
        }
    }

    /// Run one command and describe its result
    pub fn submit(&mut self, command: &str, raw_arguments: &str) -> Submission {
        let request = CommandRequest::new(command, raw_arguments);
        self.submit_request(&request)
    }

    /// Run one full input line such as `cp a.txt b.txt`
    pub fn submit_line(&mut self, line: &str) -> Submission {
        self.submit_request(&CommandRequest::parse_line(line))
    }

    fn submit_request(&mut self, request: &CommandRequest) -> Submission {
        let echo = ClassifiedLine::new(
            format!("$ {}", request.command_line()),
            LineCategory::Command,
        );

        match self.dispatch(request) {
            Ok(outcome) => success(outcome, echo),
            Err(e) => {
                warn!("{} failed: {}", request.name, e);
                failure(&e, echo)
            }
        }
    }

    fn dispatch(&mut self, request: &CommandRequest) -> Result<Outcome> {
        let kind = CommandKind::parse(&request.name)?;
        if kind.is_recorded() {
            self.session.record(request);
        }

        let mut ctx = Context {
            session: &mut self.session,
            toolchain: &self.toolchain,
            runner: self.runner.as_ref(),
        };
        commands::execute(&kind, &request.raw_arguments, &mut ctx)
    }

    pub fn current_working_directory(&self) -> &Path {
        self.session.current_directory()
    }

    /// Recorded command lines, oldest first
    pub fn history_entries(&self) -> Vec<String> {
        self.session.history().lines()
    }

    pub fn platform(&self) -> PlatformKind {
        self.toolchain.kind()
    }

    pub fn home(&self) -> PathBuf {
        self.session.home().to_path_buf()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Step the history cursor back, returning the command line under it
    pub fn history_previous(&mut self) -> Option<String> {
        self.session
            .history_mut()
            .previous()
            .map(|entry| entry.command_line())
    }

    /// Step the history cursor forward; `None` once past the newest entry
    pub fn history_next(&mut self) -> Option<String> {
        self.session
            .history_mut()
            .next()
            .map(|entry| entry.command_line())
    }
}

fn success(outcome: Outcome, echo: ClassifiedLine) -> Submission {
    match outcome {
        Outcome::Clear => Submission {
            display_text: String::new(),
            category: LineCategory::Output,
            lines: Vec::new(),
            echo,
            clear: true,
        },
        Outcome::Output(text) => Submission {
            lines: classify(&text),
            display_text: text,
            category: LineCategory::Output,
            echo,
            clear: false,
        },
        Outcome::Message(text) => Submission {
            lines: vec![ClassifiedLine::output(text.clone())],
            display_text: text,
            category: LineCategory::Output,
            echo,
            clear: false,
        },
    }
}

fn failure(error: &Error, echo: ClassifiedLine) -> Submission {
    let text = format!("Error: {}", error);
    Submission {
        lines: text.lines().map(ClassifiedLine::error).collect(),
        display_text: text,
        category: LineCategory::Error,
        echo,
        clear: false,
    }
}

//! Command request and history entry models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single command submitted to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Portable command name (`cp`, `ls`, `chmod`, ...)
    pub name: String,
    /// Free-form argument text exactly as entered
    pub raw_arguments: String,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>, raw_arguments: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            raw_arguments: raw_arguments.into().trim().to_string(),
        }
    }

    /// Split a full input line into command name and argument text
    pub fn parse_line(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => Self::new(name, rest),
            None => Self::new(trimmed, ""),
        }
    }

    /// The command as it would be typed, e.g. `cp a.txt b.txt`
    pub fn command_line(&self) -> String {
        if self.raw_arguments.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.raw_arguments)
        }
    }
}

/// A command that has been recorded in the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutedCommand {
    pub name: String,
    pub raw_arguments: String,
    /// When the command was submitted
    pub recorded_at: DateTime<Utc>,
}

impl ExecutedCommand {
    pub fn new(request: &CommandRequest) -> Self {
        Self {
            name: request.name.clone(),
            raw_arguments: request.raw_arguments.clone(),
            recorded_at: Utc::now(),
        }
    }

    /// The command as it was typed
    pub fn command_line(&self) -> String {
        if self.raw_arguments.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.raw_arguments)
        }
    }
}

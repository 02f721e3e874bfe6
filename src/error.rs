//! Error types and Result aliases for shellport

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for shellport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shellport
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Argument validation ===
    /// A required argument was not supplied
    #[error("{command} requires {expected}")]
    MissingArgument { command: String, expected: String },

    /// More arguments were supplied than the command accepts
    #[error("{command} accepts {limit}")]
    TooManyArguments { command: String, limit: String },

    /// An argument was supplied but could not be interpreted
    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument { command: String, reason: String },

    // === Paths ===
    /// A path could not be resolved or does not name what the command needs
    #[error("{reason}: {}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// The source of a copy or move does not exist
    #[error("Source file/directory does not exist: {0}")]
    SourceNotFound(String),

    /// A file operand does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    // === Platform and native tools ===
    /// The host platform has no equivalent for the requested operation
    #[error("{command} is not supported on {platform}: {reason}")]
    UnsupportedOperation {
        command: String,
        platform: String,
        reason: String,
    },

    /// A native tool refused the operation for lack of privilege
    #[error("{command} failed (administrator privileges required): {message}")]
    PermissionDenied { command: String, message: String },

    /// A native tool exited with a non-zero status
    #[error("{command} failed with exit code {exit_code}: {output}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        output: String,
    },

    /// The native program could not be started at all
    #[error("Failed to spawn '{program}': {reason}")]
    CommandSpawnFailed { program: String, reason: String },

    /// The native program exceeded the configured timeout and was killed
    #[error("Command '{program}' timed out after {duration:?}")]
    CommandTimeout { program: String, duration: Duration },

    /// No command name was given
    #[error("Command cannot be empty")]
    EmptyCommand,

    // === Configuration ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === I/O ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::MissingArgument`]
    pub fn missing(command: &str, expected: &str) -> Self {
        Error::MissingArgument {
            command: command.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Shorthand for [`Error::CommandFailed`]
    pub fn failed(command: &str, exit_code: i32, output: &str) -> Self {
        Error::CommandFailed {
            command: command.to_string(),
            exit_code,
            output: output.trim_end().to_string(),
        }
    }

    /// Shorthand for [`Error::PermissionDenied`]
    pub fn denied(command: &str, message: &str) -> Self {
        Error::PermissionDenied {
            command: command.to_string(),
            message: message.trim_end().to_string(),
        }
    }

    /// Whether this error was produced before any process was spawned
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument { .. }
                | Error::TooManyArguments { .. }
                | Error::InvalidArgument { .. }
                | Error::InvalidPath { .. }
                | Error::SourceNotFound(_)
                | Error::FileNotFound(_)
                | Error::UnsupportedOperation { .. }
                | Error::EmptyCommand
        )
    }
}

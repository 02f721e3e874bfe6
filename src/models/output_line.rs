//! Classified Output Line Model
//!
//! Represents a single line of command output together with the
//! presentation category assigned by the output classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation category of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineCategory {
    /// The echoed command line
    Command,
    /// Ordinary output, including numeric and listing lines
    #[default]
    Output,
    /// Error or failure text
    Error,
    /// A drive-letter-qualified path
    Directory,
}

impl LineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCategory::Command => "command",
            LineCategory::Output => "output",
            LineCategory::Error => "error",
            LineCategory::Directory => "directory",
        }
    }
}

impl fmt::Display for LineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of output with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// The line text without its terminator
    pub text: String,
    pub category: LineCategory,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, category: LineCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Output)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Error)
    }

    pub fn is_error(&self) -> bool {
        self.category == LineCategory::Error
    }
}

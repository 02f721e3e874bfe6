//! Results produced by command handlers

use serde::{Deserialize, Serialize};

/// What a successful command hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Raw native output, to be classified line by line
    Output(String),
    /// A message composed by the engine itself (confirmations, benign "not found" results)
    Message(String),
    /// Ask the presentation layer to clear its display
    Clear,
}

impl Outcome {
    pub fn message(text: impl Into<String>) -> Self {
        Outcome::Message(text.into())
    }
}

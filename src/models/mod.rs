//! Core data models for shellport
//!
//! This module contains the data structures that flow through the
//! command engine: requests and history entries, native invocations
//! and their results, and classified output lines.

pub mod command;
pub mod invocation;
pub mod outcome;
pub mod output_line;

// Re-exports for convenience
pub use command::{CommandRequest, ExecutedCommand};
pub use invocation::{ExecutionResult, NativeCommand, ResolvedInvocation};
pub use outcome::Outcome;
pub use output_line::{ClassifiedLine, LineCategory};

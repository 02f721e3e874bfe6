//! Configuration management for shellport
//!
//! Settings are grouped into the session (where and on which toolchain the
//! engine starts), execution (how native processes are run) and logging.
//! Every section has defaults, so a partial or missing file is fine.

pub mod loader;

use crate::platform::PlatformKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for shellport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session startup configuration
    pub session: SessionConfig,

    /// Native process execution configuration
    pub execution: ExecutionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Session startup configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Starting directory; the process working directory when unset
    pub initial_directory: Option<PathBuf>,

    /// Force a toolchain instead of detecting the host
    pub platform: Option<PlatformKind>,
}

/// Native process execution configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Kill native processes that run longer than this; unset waits forever
    pub command_timeout_secs: Option<u64>,

    /// Extra environment variables for every native process
    pub environment: HashMap<String, String>,
}

impl ExecutionConfig {
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Toolchain for this configuration, detecting the host when unset
    pub fn platform(&self) -> PlatformKind {
        self.session.platform.unwrap_or_else(PlatformKind::detect)
    }
}

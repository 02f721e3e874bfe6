//! shellport - a portable command shell core
//!
//! This library maps a fixed, portable command vocabulary (`cp`, `chmod`,
//! `grep`, `addUser`, `quotacheck`, ...) onto whichever native toolchain
//! the host provides: POSIX utilities, or the Windows `cmd.exe`,
//! PowerShell and administration tools.
//!
//! ## Features
//!
//! - **Path resolution:** relative, rooted and drive-letter paths resolved against the session
//! - **Quote-aware arguments:** `cp a.txt "my doc.txt"` keeps the space in the second path
//! - **Fail-fast validation:** argument counts and file existence are checked before spawning
//! - **Merged output:** standard error is interleaved with standard output in arrival order
//! - **Classification:** output lines are tagged as output, errors or directory paths
//! - **Configuration:** TOML or JSON configuration files
//!
//! ## Module Organization
//!
//! - [`shell`] - The [`Shell`] facade: submit a command, get a [`Submission`]
//! - [`commands`] - The command vocabulary and its handlers
//! - [`platform`] - Platform detection and the two native toolchains
//! - [`execution`] - Process execution behind the [`ProcessRunner`] trait
//! - [`session`] - Current directory and history
//! - [`paths`], [`tokenizer`], [`classifier`] - Pure helpers
//! - [`config`] - Configuration loading and validation
//! - [`models`] - Data structures passed between the layers
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use shellport::init;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shell = init()?;
//! let result = shell.submit("ls", "-la");
//! for line in &result.lines {
//!     println!("[{}] {}", line.category, line.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Execution Model
//!
//! Commands run one at a time on the caller's thread. Each native process
//! is drained and reaped before the next one starts; there is no background
//! execution. A timeout can be configured, otherwise a hung process blocks
//! the session.

#[macro_use]
extern crate tracing;

pub mod classifier;
pub mod commands;
pub mod config;
pub mod error;
pub mod execution;
pub mod history;
pub mod models;
pub mod paths;
pub mod platform;
pub mod session;
pub mod shell;
pub mod tokenizer;

// Re-exports for core functionality
pub use config::Config;
pub use error::{Error, Result};
pub use execution::{NativeRunner, ProcessRunner};
pub use platform::PlatformKind;
pub use shell::{Shell, Submission};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use models::{ClassifiedLine, LineCategory};

// Version information
/// The current version of shellport from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize a shell with configuration from the default locations
///
/// A configuration that fails to load or validate is reported and replaced
/// by the defaults; only a session that cannot start is an error.
///
/// # Errors
///
/// Fails when the starting directory does not exist or no home directory
/// can be determined.
pub fn init() -> Result<Shell> {
    info!("🚀 Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    init_from(&config)
}

/// Initialize a shell from one explicit configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Shell> {
    info!(
        "🚀 Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = ConfigLoader::load_from_path(config_path).map_err(|e| {
        error!(
            "Failed to load custom configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })?;

    init_from(&config)
}

/// Initialize a shell from an in-memory configuration
pub fn init_from(config: &Config) -> Result<Shell> {
    let shell = Shell::from_config(config)?;
    info!(
        "✅ {} ready ({} toolchain, cwd {})",
        NAME,
        shell.platform(),
        shell.current_working_directory().display()
    );
    Ok(shell)
}

/// Human-readable explanation of a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check that the file exists and is readable\n• Run without --config to use defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::InvalidPath { path, reason } => {
            format!(
                "Startup Error: {}: {}\n\nTry:\n• Set session.initial_directory to an existing directory",
                reason,
                path.display()
            )
        }
        _ => {
            format!(
                "Unexpected Error: {}\n\nPlease report this issue with debug logs enabled",
                error
            )
        }
    }
}

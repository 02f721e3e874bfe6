//! Platform abstraction traits
//!
//! Each trait covers one concern of the portable command vocabulary. An
//! implementation only builds native commands; it never
//! spawns anything and never decides the working directory.

use super::mode::PermissionFlags;
use crate::error::Result;
use crate::models::NativeCommand;
use std::path::{Path, PathBuf};

/// How a platform answers a `chmod` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChange {
    /// Run a native tool
    Run(NativeCommand),
    /// Apply the owner flags in-process; no native equivalent exists
    Apply(PermissionFlags),
}

/// How a platform answers a `file` type query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeProbe {
    /// Run a native tool and report its output
    Run(NativeCommand),
    /// The type was determined without spawning anything
    Detected(&'static str),
}

/// Steps needed to describe the access rights of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessProbe {
    /// Report readable/writable/executable/hidden flags from metadata
    pub attribute_flags: bool,
    /// Mandatory permission listing
    pub listing: Option<NativeCommand>,
    /// Extended ACL details under a heading; failures are ignored
    pub details: Option<(&'static str, NativeCommand)>,
}

/// How a failed ownership change is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    CommandFailed,
    PermissionDenied,
}

/// File content and copy operations
pub trait FileOps: Send + Sync {
    /// Copy `source` to `destination`; `recursive` when the source is a directory
    fn copy(&self, source: &Path, destination: &Path, recursive: bool) -> NativeCommand;

    fn move_path(&self, source: &Path, destination: &Path) -> NativeCommand;

    /// Commands that print the files in order, run one after another
    fn concatenate(&self, files: &[PathBuf]) -> Vec<NativeCommand>;

    fn page(&self, file: &Path) -> NativeCommand;

    fn head(&self, file: &Path, count: usize) -> NativeCommand;

    /// Line-numbered search for `pattern` in one file
    fn search_in_file(&self, pattern: &str, file: &Path) -> NativeCommand;

    fn compress(&self, file: &Path) -> NativeCommand;

    /// Suffix appended to a compressed file's name, `None` for in-place compression
    fn compressed_suffix(&self) -> Option<&'static str>;

    /// `None` when the file is created in-process
    fn touch(&self, file: &Path) -> Option<NativeCommand>;
}

/// Mode, ownership and access-right operations
pub trait PermissionOps: Send + Sync {
    fn change_mode(&self, mode: &str, file: &Path) -> Result<ModeChange>;

    /// Commands run in order; the first failure stops the sequence
    fn change_owner(&self, owner: &str, file: &Path) -> Vec<NativeCommand>;

    fn change_group(&self, group: &str, file: &Path) -> NativeCommand;

    fn ownership_failure(&self) -> FailureKind;

    fn access_rights(&self, path: &Path) -> AccessProbe;
}

/// Local user and group administration
pub trait AccountOps: Send + Sync {
    fn add_user(&self, name: &str) -> NativeCommand;

    fn add_group(&self, name: &str) -> NativeCommand;
}

/// Process, quota and disk-usage inspection
pub trait SystemOps: Send + Sync {
    fn process_list(&self, args: &[String]) -> NativeCommand;

    fn quota(&self, args: &[String]) -> NativeCommand;

    /// Whether `disk_usage` measures `target` itself rather than forwarding
    /// the raw arguments to the tool
    fn measures_path(&self) -> bool;

    /// `target` is the resolved first operand when `measures_path` holds,
    /// otherwise the current directory
    fn disk_usage(&self, args: &[String], target: &Path) -> NativeCommand;
}

/// File type detection and filesystem search
pub trait SearchOps: Send + Sync {
    fn file_type(&self, file: &Path) -> TypeProbe;

    /// Recursive name search below the current directory
    fn find_by_name(&self, pattern: &str) -> NativeCommand;

    fn locate(&self, pattern: &str) -> NativeCommand;
}

/// Network retrieval
pub trait NetworkOps: Send + Sync {
    fn download(&self, url: &str, output: &str) -> NativeCommand;
}

/// Forwarding of commands outside the portable vocabulary
pub trait ShellOps: Send + Sync {
    /// Native spelling of a portable command name
    fn native_name<'a>(&self, name: &'a str) -> &'a str;

    fn passthrough(&self, name: &str, args: &[String]) -> NativeCommand;
}

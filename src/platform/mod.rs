//! Platform abstraction layer
//!
//! The engine speaks one portable command vocabulary. This module maps it
//! onto the two native toolchains: POSIX utilities and the Windows
//! `cmd`/PowerShell/`net`/`icacls` family. The platform is identified once
//! per session and the matching [`Toolchain`] is built from per-concern
//! operation traits, so handlers never branch on the platform themselves.

mod mode;
mod posix;
mod traits;
mod windows;

pub use mode::{OctalMode, PermissionFlags};
pub use traits::*;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two native toolchains the engine can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Linux, macOS and other Unix-like hosts
    Posix,
    /// Windows hosts
    Windows,
}

impl PlatformKind {
    /// Identify the host platform from its reported OS name
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name such as `linux`, `macos` or `windows` to a toolchain
    pub fn from_os_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        if name == "windows" || name.starts_with("windows ") || name == "win32" {
            PlatformKind::Windows
        } else {
            PlatformKind::Posix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Posix => "posix",
            PlatformKind::Windows => "windows",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" => Ok(PlatformKind::Posix),
            "windows" | "win" => Ok(PlatformKind::Windows),
            other => Err(Error::Other(format!("Unknown platform: {}", other))),
        }
    }
}

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the platform-specific file operations
    pub fn files(kind: PlatformKind) -> Box<dyn FileOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixFiles::new()),
            PlatformKind::Windows => Box::new(windows::WindowsFiles::new()),
        }
    }

    /// Get the platform-specific permission operations
    pub fn permissions(kind: PlatformKind) -> Box<dyn PermissionOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixPermissions::new()),
            PlatformKind::Windows => Box::new(windows::WindowsPermissions::new()),
        }
    }

    /// Get the platform-specific account operations
    pub fn accounts(kind: PlatformKind) -> Box<dyn AccountOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixAccounts::new()),
            PlatformKind::Windows => Box::new(windows::WindowsAccounts::new()),
        }
    }

    /// Get the platform-specific system inspection operations
    pub fn system(kind: PlatformKind) -> Box<dyn SystemOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixSystem::new()),
            PlatformKind::Windows => Box::new(windows::WindowsSystem::new()),
        }
    }

    /// Get the platform-specific search operations
    pub fn search(kind: PlatformKind) -> Box<dyn SearchOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixSearch::new()),
            PlatformKind::Windows => Box::new(windows::WindowsSearch::new()),
        }
    }

    /// Get the platform-specific network operations
    pub fn network(kind: PlatformKind) -> Box<dyn NetworkOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixNetwork::new()),
            PlatformKind::Windows => Box::new(windows::WindowsNetwork::new()),
        }
    }

    /// Get the platform-specific shell passthrough
    pub fn shell(kind: PlatformKind) -> Box<dyn ShellOps> {
        match kind {
            PlatformKind::Posix => Box::new(posix::PosixShell::new()),
            PlatformKind::Windows => Box::new(windows::WindowsShell::new()),
        }
    }
}

/// Every operation family for one platform, selected once per session
pub struct Toolchain {
    kind: PlatformKind,
    pub files: Box<dyn FileOps>,
    pub permissions: Box<dyn PermissionOps>,
    pub accounts: Box<dyn AccountOps>,
    pub system: Box<dyn SystemOps>,
    pub search: Box<dyn SearchOps>,
    pub network: Box<dyn NetworkOps>,
    pub shell: Box<dyn ShellOps>,
}

impl Toolchain {
    pub fn for_platform(kind: PlatformKind) -> Self {
        debug!("Building {} toolchain", kind);
        Self {
            kind,
            files: Platform::files(kind),
            permissions: Platform::permissions(kind),
            accounts: Platform::accounts(kind),
            system: Platform::system(kind),
            search: Platform::search(kind),
            network: Platform::network(kind),
            shell: Platform::shell(kind),
        }
    }

    pub fn kind(&self) -> PlatformKind {
        self.kind
    }
}

impl fmt::Debug for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolchain").field("kind", &self.kind).finish()
    }
}

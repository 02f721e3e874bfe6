//! Windows toolchain: `cmd.exe` built-ins, PowerShell and the admin tools

mod accounts;
mod files;
mod network;
mod permissions;
mod search;
mod shell;
mod system;

pub use accounts::WindowsAccounts;
pub use files::WindowsFiles;
pub use network::WindowsNetwork;
pub use permissions::WindowsPermissions;
pub use search::WindowsSearch;
pub use shell::WindowsShell;
pub use system::WindowsSystem;

use crate::models::NativeCommand;
use std::path::Path;

/// A command run through `cmd.exe /c`, needed for shell built-ins
fn cmd(program: &str) -> NativeCommand {
    NativeCommand::new("cmd.exe").arg("/c").arg(program)
}

/// A PowerShell script run without loading the user profile
fn powershell(script: String) -> NativeCommand {
    NativeCommand::new("powershell")
        .args(["-NoProfile", "-Command"])
        .arg(script)
}

/// Single-quoted PowerShell literal
fn ps_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn ps_path(path: &Path) -> String {
    ps_literal(&path.to_string_lossy())
}

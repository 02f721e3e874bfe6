//! Windows passthrough through `cmd.exe`

use super::cmd;
use crate::models::NativeCommand;
use crate::platform::traits::ShellOps;

/// POSIX spellings users commonly type, and their `cmd.exe` equivalents
const RENAMES: &[(&str, &str)] = &[
    ("ls", "dir"),
    ("rm", "del"),
    ("cp", "copy"),
    ("mv", "move"),
    ("cat", "type"),
    ("clear", "cls"),
];

#[derive(Debug, Default)]
pub struct WindowsShell;

impl WindowsShell {
    pub fn new() -> Self {
        Self
    }
}

impl ShellOps for WindowsShell {
    fn native_name<'a>(&self, name: &'a str) -> &'a str {
        RENAMES
            .iter()
            .find(|(posix, _)| *posix == name)
            .map(|(_, native)| *native)
            .unwrap_or(name)
    }

    fn passthrough(&self, name: &str, args: &[String]) -> NativeCommand {
        cmd(self.native_name(name)).args(args.iter().cloned())
    }
}

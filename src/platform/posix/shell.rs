//! POSIX passthrough

use crate::models::NativeCommand;
use crate::platform::traits::ShellOps;

#[derive(Debug, Default)]
pub struct PosixShell;

impl PosixShell {
    pub fn new() -> Self {
        Self
    }
}

impl ShellOps for PosixShell {
    fn native_name<'a>(&self, name: &'a str) -> &'a str {
        name
    }

    fn passthrough(&self, name: &str, args: &[String]) -> NativeCommand {
        NativeCommand::new(name).args(args.iter().cloned())
    }
}

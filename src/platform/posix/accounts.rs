//! POSIX account administration

use crate::models::NativeCommand;
use crate::platform::traits::AccountOps;

#[derive(Debug, Default)]
pub struct PosixAccounts;

impl PosixAccounts {
    pub fn new() -> Self {
        Self
    }
}

impl AccountOps for PosixAccounts {
    fn add_user(&self, name: &str) -> NativeCommand {
        NativeCommand::new("sudo").args(["useradd", "-m", name])
    }

    fn add_group(&self, name: &str) -> NativeCommand {
        NativeCommand::new("sudo").args(["groupadd", name])
    }
}

//! Windows account administration

use super::cmd;
use crate::models::NativeCommand;
use crate::platform::traits::AccountOps;

#[derive(Debug, Default)]
pub struct WindowsAccounts;

impl WindowsAccounts {
    pub fn new() -> Self {
        Self
    }
}

impl AccountOps for WindowsAccounts {
    fn add_user(&self, name: &str) -> NativeCommand {
        cmd("net").args(["user", name, "/add"])
    }

    fn add_group(&self, name: &str) -> NativeCommand {
        cmd("net").args(["localgroup", name, "/add"])
    }
}

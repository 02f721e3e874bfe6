//! POSIX system inspection

use crate::models::NativeCommand;
use crate::platform::traits::SystemOps;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PosixSystem;

impl PosixSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemOps for PosixSystem {
    fn process_list(&self, args: &[String]) -> NativeCommand {
        if args.is_empty() {
            NativeCommand::new("ps").arg("aux")
        } else {
            NativeCommand::new("ps").args(args.iter().cloned())
        }
    }

    fn quota(&self, args: &[String]) -> NativeCommand {
        let command = NativeCommand::new("sudo").arg("quotacheck");
        if args.is_empty() {
            command.arg("-avug")
        } else {
            command.args(args.iter().cloned())
        }
    }

    fn measures_path(&self) -> bool {
        false
    }

    fn disk_usage(&self, args: &[String], _target: &Path) -> NativeCommand {
        let command = NativeCommand::new("du").arg("-h");
        if args.is_empty() {
            command.arg(".")
        } else {
            command.args(args.iter().cloned())
        }
    }
}

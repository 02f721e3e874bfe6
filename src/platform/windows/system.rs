//! Windows system inspection

use super::{cmd, powershell, ps_path};
use crate::models::NativeCommand;
use crate::platform::traits::SystemOps;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static DRIVE_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:$").expect("drive letter pattern is valid"));

#[derive(Debug, Default)]
pub struct WindowsSystem;

impl WindowsSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemOps for WindowsSystem {
    fn process_list(&self, args: &[String]) -> NativeCommand {
        cmd("tasklist").args(args.iter().cloned())
    }

    fn quota(&self, args: &[String]) -> NativeCommand {
        let command = cmd("fsutil").args(["quota", "query"]);
        match args.iter().find(|arg| DRIVE_LETTER.is_match(arg)) {
            Some(drive) => command.arg(drive.clone()),
            None => command,
        }
    }

    fn measures_path(&self) -> bool {
        true
    }

    fn disk_usage(&self, _args: &[String], target: &Path) -> NativeCommand {
        powershell(format!(
            "Get-ChildItem -LiteralPath {} -Recurse -File | \
             Measure-Object -Property Length -Sum | \
             Select-Object @{{Name='Size (MB)';Expression={{[math]::Round($_.Sum / 1MB, 2)}}}}, \
             @{{Name='Size (GB)';Expression={{[math]::Round($_.Sum / 1GB, 2)}}}}",
            ps_path(target)
        ))
    }
}

//! Windows permission and ownership operations

use super::cmd;
use crate::error::{Error, Result};
use crate::models::NativeCommand;
use crate::platform::mode::OctalMode;
use crate::platform::traits::{AccessProbe, FailureKind, ModeChange, PermissionOps};
use std::path::Path;

#[derive(Debug, Default)]
pub struct WindowsPermissions;

impl WindowsPermissions {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionOps for WindowsPermissions {
    fn change_mode(&self, mode: &str, _file: &Path) -> Result<ModeChange> {
        let parsed = OctalMode::parse(mode).ok_or_else(|| Error::UnsupportedOperation {
            command: "chmod".to_string(),
            platform: "windows".to_string(),
            reason: format!("only three-digit octal modes are supported, got '{}'", mode),
        })?;
        Ok(ModeChange::Apply(parsed.owner))
    }

    fn change_owner(&self, owner: &str, file: &Path) -> Vec<NativeCommand> {
        vec![
            cmd("takeown").arg("/f").path_arg(file),
            cmd("icacls")
                .path_arg(file)
                .arg("/setowner")
                .arg(owner)
                .args(["/t", "/c", "/l", "/q"]),
        ]
    }

    fn change_group(&self, group: &str, file: &Path) -> NativeCommand {
        cmd("icacls")
            .path_arg(file)
            .arg("/grant:r")
            .arg(format!("{}:(R,W,Rc)", group))
            .args(["/T", "/C", "/Q"])
    }

    fn ownership_failure(&self) -> FailureKind {
        FailureKind::PermissionDenied
    }

    fn access_rights(&self, path: &Path) -> AccessProbe {
        AccessProbe {
            attribute_flags: true,
            listing: None,
            details: Some(("Detailed permissions:", cmd("icacls").path_arg(path))),
        }
    }
}

//! POSIX permission and ownership operations

use crate::error::Result;
use crate::models::NativeCommand;
use crate::platform::traits::{AccessProbe, FailureKind, ModeChange, PermissionOps};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PosixPermissions;

impl PosixPermissions {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionOps for PosixPermissions {
    fn change_mode(&self, mode: &str, file: &Path) -> Result<ModeChange> {
        // chmod understands symbolic modes too, so nothing is validated here
        Ok(ModeChange::Run(
            NativeCommand::new("chmod").arg(mode).path_arg(file),
        ))
    }

    fn change_owner(&self, owner: &str, file: &Path) -> Vec<NativeCommand> {
        vec![NativeCommand::new("chown").arg(owner).path_arg(file)]
    }

    fn change_group(&self, group: &str, file: &Path) -> NativeCommand {
        NativeCommand::new("chgrp").arg(group).path_arg(file)
    }

    fn ownership_failure(&self) -> FailureKind {
        FailureKind::CommandFailed
    }

    fn access_rights(&self, path: &Path) -> AccessProbe {
        AccessProbe {
            attribute_flags: false,
            listing: Some(NativeCommand::new("ls").arg("-ld").path_arg(path)),
            details: Some(("ACL details:", NativeCommand::new("getfacl").path_arg(path))),
        }
    }
}

//! POSIX search operations

use crate::models::NativeCommand;
use crate::platform::traits::{SearchOps, TypeProbe};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PosixSearch;

impl PosixSearch {
    pub fn new() -> Self {
        Self
    }
}

impl SearchOps for PosixSearch {
    fn file_type(&self, file: &Path) -> TypeProbe {
        TypeProbe::Run(NativeCommand::new("file").path_arg(file))
    }

    fn find_by_name(&self, pattern: &str) -> NativeCommand {
        NativeCommand::new("find")
            .args([".", "-name"])
            .arg(format!("*{}*", pattern))
    }

    fn locate(&self, pattern: &str) -> NativeCommand {
        NativeCommand::new("locate").arg(pattern)
    }
}

//! POSIX file operations

use crate::models::NativeCommand;
use crate::platform::traits::FileOps;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct PosixFiles;

impl PosixFiles {
    pub fn new() -> Self {
        Self
    }
}

impl FileOps for PosixFiles {
    fn copy(&self, source: &Path, destination: &Path, recursive: bool) -> NativeCommand {
        let command = NativeCommand::new("cp");
        let command = if recursive { command.arg("-R") } else { command };
        command.path_arg(source).path_arg(destination)
    }

    fn move_path(&self, source: &Path, destination: &Path) -> NativeCommand {
        NativeCommand::new("mv").path_arg(source).path_arg(destination)
    }

    fn concatenate(&self, files: &[PathBuf]) -> Vec<NativeCommand> {
        let command = files
            .iter()
            .fold(NativeCommand::new("cat"), |cmd, file| cmd.path_arg(file));
        vec![command]
    }

    fn page(&self, file: &Path) -> NativeCommand {
        NativeCommand::new("less").path_arg(file)
    }

    fn head(&self, file: &Path, count: usize) -> NativeCommand {
        NativeCommand::new("head")
            .arg("-n")
            .arg(count.to_string())
            .path_arg(file)
    }

    fn search_in_file(&self, pattern: &str, file: &Path) -> NativeCommand {
        NativeCommand::new("grep").arg("-n").arg(pattern).path_arg(file)
    }

    fn compress(&self, file: &Path) -> NativeCommand {
        NativeCommand::new("gzip").path_arg(file)
    }

    fn compressed_suffix(&self) -> Option<&'static str> {
        Some(".gz")
    }

    fn touch(&self, file: &Path) -> Option<NativeCommand> {
        Some(NativeCommand::new("touch").path_arg(file))
    }
}

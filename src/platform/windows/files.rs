//! Windows file operations

use super::{cmd, powershell, ps_path};
use crate::models::NativeCommand;
use crate::platform::traits::FileOps;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct WindowsFiles;

impl WindowsFiles {
    pub fn new() -> Self {
        Self
    }
}

impl FileOps for WindowsFiles {
    fn copy(&self, source: &Path, destination: &Path, recursive: bool) -> NativeCommand {
        // /Y suppresses overwrite prompts; stdin is never attached
        if recursive {
            cmd("xcopy")
                .path_arg(source)
                .path_arg(destination)
                .args(["/E", "/I", "/Y"])
        } else {
            cmd("copy").arg("/Y").path_arg(source).path_arg(destination)
        }
    }

    fn move_path(&self, source: &Path, destination: &Path) -> NativeCommand {
        cmd("move").arg("/Y").path_arg(source).path_arg(destination)
    }

    fn concatenate(&self, files: &[PathBuf]) -> Vec<NativeCommand> {
        files.iter().map(|file| cmd("type").path_arg(file)).collect()
    }

    fn page(&self, file: &Path) -> NativeCommand {
        cmd("more").path_arg(file)
    }

    fn head(&self, file: &Path, count: usize) -> NativeCommand {
        powershell(format!(
            "Get-Content -LiteralPath {} -TotalCount {}",
            ps_path(file),
            count
        ))
    }

    fn search_in_file(&self, pattern: &str, file: &Path) -> NativeCommand {
        cmd("findstr").arg("/n").arg(pattern).path_arg(file)
    }

    fn compress(&self, file: &Path) -> NativeCommand {
        cmd("compact").arg("/C").path_arg(file)
    }

    fn compressed_suffix(&self) -> Option<&'static str> {
        None
    }

    fn touch(&self, _file: &Path) -> Option<NativeCommand> {
        None
    }
}

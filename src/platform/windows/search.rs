//! Windows search operations

use super::cmd;
use crate::models::NativeCommand;
use crate::platform::traits::{SearchOps, TypeProbe};
use std::path::Path;

#[derive(Debug, Default)]
pub struct WindowsSearch;

impl WindowsSearch {
    pub fn new() -> Self {
        Self
    }
}

impl SearchOps for WindowsSearch {
    fn file_type(&self, file: &Path) -> TypeProbe {
        if file.is_dir() {
            return TypeProbe::Detected("directory");
        }

        let extension = file
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        TypeProbe::Detected(match extension.as_str() {
            "exe" => "executable",
            "txt" => "text",
            "jpg" | "png" => "image",
            _ => "unknown",
        })
    }

    fn find_by_name(&self, pattern: &str) -> NativeCommand {
        cmd("dir").args(["/s", "/b"]).arg(format!("*{}*", pattern))
    }

    fn locate(&self, pattern: &str) -> NativeCommand {
        // cmd.exe sees the bare `|` and pipes the listing into findstr
        cmd("dir").args(["/s", "/b", "*", "|", "findstr", "/i", pattern])
    }
}

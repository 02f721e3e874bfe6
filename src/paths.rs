//! Path resolution against the session's current directory
//!
//! User-supplied paths may be relative, rooted (`/x`, `\x`) or
//! drive-letter qualified (`C:\x`). Resolution is purely lexical and never
//! touches the filesystem; callers check existence where they need it.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolves user paths relative to a base directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: PathBuf,
}

impl PathResolver {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// The directory an empty path resolves to
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Resolve `path` against `base`
    ///
    /// Rules, first match wins:
    /// 1. empty → home directory
    /// 2. `..` → parent of `base`
    /// 3. rooted or drive-letter form → the path itself
    /// 4. anything else → `base` joined with the path
    pub fn resolve(&self, path: &str, base: &Path) -> Result<PathBuf> {
        let path = path.trim();

        if path.is_empty() {
            return Ok(self.home.clone());
        }

        if path == ".." {
            return base
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| Error::InvalidPath {
                    path: base.to_path_buf(),
                    reason: "Directory has no parent".to_string(),
                });
        }

        if is_absolute_form(path) {
            return Ok(normalize(Path::new(path)));
        }

        Ok(normalize(&base.join(path)))
    }
}

/// Whether `path` is rooted or drive-letter qualified
pub fn is_absolute_form(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || path.chars().nth(1) == Some(':')
}

/// Whether the raw argument names a directory by its trailing separator
pub fn has_trailing_separator(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}

/// Lexically remove `.` components and fold `..` into its parent
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_in_name = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if ends_in_name {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

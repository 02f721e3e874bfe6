//! Octal permission modes for platforms without permission bits

use serde::{Deserialize, Serialize};

/// Read/write/execute flags for one class of user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionFlags {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl PermissionFlags {
    /// Flags for a single octal digit; each flag is tested independently
    pub fn from_digit(digit: u8) -> Self {
        Self {
            read: digit & 4 != 0,
            write: digit & 2 != 0,
            execute: digit & 1 != 0,
        }
    }
}

/// A three-digit octal mode such as `755`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OctalMode {
    pub owner: PermissionFlags,
    pub group: PermissionFlags,
    pub other: PermissionFlags,
}

impl OctalMode {
    /// Parse exactly three octal digits, `None` for anything else
    pub fn parse(mode: &str) -> Option<Self> {
        let digits: Vec<u8> = mode
            .chars()
            .map(|c| c.to_digit(8).map(|d| d as u8))
            .collect::<Option<Vec<_>>>()?;

        match digits.as_slice() {
            [owner, group, other] => Some(Self {
                owner: PermissionFlags::from_digit(*owner),
                group: PermissionFlags::from_digit(*group),
                other: PermissionFlags::from_digit(*other),
            }),
            _ => None,
        }
    }
}

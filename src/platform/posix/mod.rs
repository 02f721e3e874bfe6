//! POSIX toolchain: coreutils, findutils and friends

mod accounts;
mod files;
mod network;
mod permissions;
mod search;
mod shell;
mod system;

pub use accounts::PosixAccounts;
pub use files::PosixFiles;
pub use network::PosixNetwork;
pub use permissions::PosixPermissions;
pub use search::PosixSearch;
pub use shell::PosixShell;
pub use system::PosixSystem;

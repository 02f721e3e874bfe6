//! Permission, ownership and access-rights handlers

use super::Context;
use crate::error::{Error, Result};
use crate::models::Outcome;
use crate::platform::{FailureKind, ModeChange, PermissionFlags};
use crate::tokenizer::{split_first, unquote};
use std::fs;
use std::path::{Path, PathBuf};

/// Split `<word> <path...>` where the path is the rest of the line
fn word_and_path<'r>(command: &str, raw: &'r str, expected: &str) -> Result<(&'r str, String)> {
    match split_first(raw) {
        Some((word, rest)) if !rest.is_empty() => Ok((word, unquote(rest))),
        _ => Err(Error::missing(command, expected)),
    }
}

/// `chmod <mode> <path>`
pub(super) fn change_mode(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let (mode, file) = word_and_path("chmod", raw, "a mode and a file")?;
    let path = ctx.require_existing(&file)?;

    match ctx.toolchain.permissions.change_mode(mode, &path)? {
        ModeChange::Run(command) => {
            ctx.run_checked("chmod", command, FailureKind::CommandFailed)?;
            Ok(Outcome::message(format!("Changed permissions for {}", file)))
        }
        ModeChange::Apply(flags) => {
            apply_owner_flags(&path, flags)?;
            Ok(Outcome::message(format!(
                "Set permissions for {} (read: {}, write: {}, execute: {})",
                file, flags.read, flags.write, flags.execute
            )))
        }
    }
}

/// The attribute model only has a read-only bit, driven by the write flag
#[allow(clippy::permissions_set_readonly_false)]
fn apply_owner_flags(path: &Path, flags: PermissionFlags) -> Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(!flags.write);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// `chown <owner[:group]> <path>`
pub(super) fn change_owner(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let (owner, file) = word_and_path("chown", raw, "an owner and a file")?;
    let path = ctx.require_existing(&file)?;

    let permissions = &ctx.toolchain.permissions;
    let failure = permissions.ownership_failure();
    for step in permissions.change_owner(owner, &path) {
        ctx.run_checked("chown", step, failure)?;
    }

    Ok(Outcome::message(format!(
        "Changed owner of {} to {}",
        file, owner
    )))
}

/// `chgrp <group> <path>`
pub(super) fn change_group(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let (group, file) = word_and_path("chgrp", raw, "a group and a file")?;
    let path = ctx.require_existing(&file)?;

    let permissions = &ctx.toolchain.permissions;
    let command = permissions.change_group(group, &path);
    ctx.run_checked("chgrp", command, permissions.ownership_failure())?;

    Ok(Outcome::message(format!(
        "Changed group of {} to {}",
        file, group
    )))
}

/// `accessrights [path]`, defaulting to the current directory
pub(super) fn access_rights(ctx: &mut Context<'_>, raw: &str) -> Result<Outcome> {
    let target = unquote(raw);
    let path: PathBuf = if target.is_empty() {
        ctx.session.current_directory().to_path_buf()
    } else {
        ctx.require_existing(&target)?
    };

    let probe = ctx.toolchain.permissions.access_rights(&path);
    let mut report = format!("Access rights for: {}\n", path.display());

    if probe.attribute_flags {
        let metadata = fs::metadata(&path)?;
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        report.push_str(&format!("Readable: {}\n", yes_no(is_readable(&path))));
        report.push_str(&format!(
            "Writable: {}\n",
            yes_no(!metadata.permissions().readonly())
        ));
        report.push_str(&format!(
            "Executable: {}\n",
            yes_no(is_executable(&path, &metadata))
        ));
        report.push_str(&format!("Hidden: {}\n", yes_no(is_hidden(&path, &metadata))));
    }

    if let Some(listing) = probe.listing {
        let result = ctx.run_checked("accessrights", listing, FailureKind::CommandFailed)?;
        report.push_str(&result.combined_output);
    }

    if let Some((heading, details)) = probe.details {
        match ctx.run(details) {
            Ok(result) if result.success() => {
                report.push_str(&format!("\n{}\n{}", heading, result.combined_output));
            }
            Ok(result) => debug!("Access details exited with {}", result.exit_code),
            Err(e) => debug!("Access details unavailable: {}", e),
        }
    }

    Ok(Outcome::Output(report))
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

fn is_executable(path: &Path, metadata: &fs::Metadata) -> bool {
    if metadata.is_dir() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            matches!(
                ext.to_lowercase().as_str(),
                "exe" | "bat" | "cmd" | "ps1" | "com"
            )
        })
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_hidden(_path: &Path, metadata: &fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(path: &Path, _metadata: &fs::Metadata) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

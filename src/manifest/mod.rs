//! Rewriting `environment.sdk` in a pubspec.yaml.
//!
//! [`rewrite_sdk_constraint`] is the pure in-memory step. [`update_sdk_version`]
//! wraps it with the read and the write of the file on disk.

mod rewrite;
mod scan;

pub use rewrite::{SdkRewrite, rewrite_sdk_constraint};
pub use scan::{LineAction, SectionState};

use crate::error::{Result, UpdateError};
use crate::fs::{ManifestWrite, WriteState};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Manifest path used when none is given, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "pubspec.yaml";

/// A replaced `sdk:` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub old: String,
    pub new: String,
}

/// Sets `environment.sdk` in the manifest at `path` to `new_version`.
///
/// Returns `Ok(None)` when the manifest has no `sdk:` key under
/// `environment:`. The file is left as it was in that case.
///
/// # Errors
///
/// - [`UpdateError::ManifestNotFound`] if `path` does not exist. No file is created.
/// - [`UpdateError::Io`], [`UpdateError::Persist`] or [`UpdateError::Other`] on
///   read or write failure.
pub fn update_sdk_version(
    path: &Path,
    new_version: &str,
    dry_run: bool,
) -> Result<Option<VersionChange>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UpdateError::ManifestNotFound(path.to_path_buf()),
        _ => UpdateError::Io(e),
    })?;

    let rewrite = rewrite_sdk_constraint(&content, new_version);

    let Some(old) = rewrite.old_version else {
        log::debug!("No environment.sdk entry in {}", path.display());
        return Ok(None);
    };

    log::info!("Updating sdk version from {} to {}", old, new_version);

    let mut write = ManifestWrite::stage(path.to_path_buf(), content, rewrite.content, dry_run);
    write.commit()?;
    if write.state() == WriteState::Skipped {
        log::debug!("{} already at {}", path.display(), new_version);
    }

    Ok(Some(VersionChange {
        old,
        new: new_version.to_string(),
    }))
}

//! Staged, atomic replacement of a single manifest file.
//!
//! ## Execution Guarantees
//!
//! - **Atomicity**: New content goes to a temporary file next to the real
//!   manifest which is then renamed over it. Readers see the old or the new
//!   file, never a truncated one.
//! - **Symlinks**: The link is resolved first, so the target file is replaced
//!   and the link itself is left in place
//! - **Permissions**: The original file mode is copied onto the replacement
//! - **Idempotency**: Unchanged content is skipped without touching the file
//!
//! ## Example
//!
//! ```no_run
//! # use update_sdk_version::fs::ManifestWrite;
//! # use std::path::PathBuf;
//! # fn example() -> update_sdk_version::error::Result<()> {
//! let original = std::fs::read_to_string("pubspec.yaml")?;
//! let mut write = ManifestWrite::stage(
//!     PathBuf::from("pubspec.yaml"),
//!     original,
//!     "environment:\n  sdk: ^3.5.0\n".into(),
//!     false,
//! );
//! write.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, UpdateError};

use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteState {
    /// New content differs and waits for `commit()`.
    Staged,
    /// Content written (or reported, in dry-run mode).
    Committed,
    /// Content was already identical; nothing to do.
    Skipped,
}

/// A pending whole-file write.
///
/// Must be explicitly committed. If dropped while staged, logs a warning.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, `commit()` only logs what would be written.
#[must_use = "ManifestWrite must be committed"]
#[derive(Debug)]
pub struct ManifestWrite {
    path: PathBuf,
    new: String,
    dry_run: bool,
    state: WriteState,
}

impl ManifestWrite {
    /// Stages `new_content` for `path`, whose current content is `original`.
    ///
    /// If the two are identical, the write is marked [`WriteState::Skipped`].
    pub fn stage(path: PathBuf, original: String, new_content: String, dry_run: bool) -> Self {
        log::debug!("Staging update for: {}", path.display());

        let state = if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            WriteState::Skipped
        } else {
            WriteState::Staged
        };

        Self {
            path,
            new: new_content,
            dry_run,
            state,
        }
    }

    pub fn state(&self) -> WriteState {
        self.state
    }

    /// Applies the staged write.
    ///
    /// A skipped write commits as a no-op. Committing twice is an error.
    pub fn commit(&mut self) -> Result<()> {
        match self.state {
            WriteState::Skipped => return Ok(()),
            WriteState::Committed => return Err(UpdateError::AlreadyCommitted(self.path.clone())),
            WriteState::Staged => {}
        }

        if self.dry_run {
            log::info!("Would update: {}", self.path.display());
            self.state = WriteState::Committed;
            return Ok(());
        }

        Self::replace_atomically(&self.path, &self.new)?;
        self.state = WriteState::Committed;
        log::debug!("Updated: {}", self.path.display());
        Ok(())
    }

    fn replace_atomically(path: &Path, content: &str) -> Result<()> {
        let target = fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve {}", path.display()))?;
        if target.as_path() != path {
            log::debug!("Resolved {} → {}", path.display(), target.display());
        }

        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(&target)?.permissions();

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tmp.as_file().sync_all()?;
        fs::set_permissions(tmp.path(), permissions)?;
        tmp.persist(&target)?;

        Ok(())
    }
}

impl Drop for ManifestWrite {
    fn drop(&mut self) {
        if self.state == WriteState::Staged && !self.dry_run {
            log::warn!("Write to {} dropped without commit", self.path.display());
        }
    }
}

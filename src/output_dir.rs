//! Output directory lifecycle.
//!
//! Each run owns its output directory: an existing one is removed and a
//! fresh, empty one created in its place. Concurrent runs against the same
//! directory race on this and are not supported.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// What [`recreate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recreated {
    /// An existing directory was deleted first.
    pub deleted: bool,
}

/// Delete `path` if it exists, then create it empty (with parents).
///
/// Refuses to delete the current directory or any of its ancestors, a
/// directory holding `input` (the file or folder about to be converted),
/// and a regular file.
pub fn recreate(path: &Path, input: &Path) -> Result<Recreated> {
    let deleted = path.exists();
    if deleted {
        if !path.is_dir() {
            return Err(Error::OutputDirectory(path.to_path_buf()));
        }
        let target = path.canonicalize().map_err(|e| Error::io(path, e))?;
        ensure_not_cwd(path, &target)?;
        ensure_not_input(path, &target, input)?;
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
        info!(path = %path.display(), "deleted output directory");
    }

    fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "created output directory");
    Ok(Recreated { deleted })
}

fn ensure_not_cwd(path: &Path, target: &Path) -> Result<()> {
    let cwd = std::env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .map_err(|e| Error::io(".", e))?;
    if cwd.starts_with(target) {
        return Err(Error::UnsafeOutputDirectory(path.to_path_buf()));
    }
    Ok(())
}

fn ensure_not_input(path: &Path, target: &Path, input: &Path) -> Result<()> {
    let input_abs = input.canonicalize().map_err(|e| Error::io(input, e))?;
    if input_abs.starts_with(target) {
        return Err(Error::OutputContainsInput {
            output: path.to_path_buf(),
            input: input.to_path_buf(),
        });
    }
    Ok(())
}

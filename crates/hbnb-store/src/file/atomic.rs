//! Atomic write primitives
//!
//! Uses temp→rename so a reader never observes a half-written document

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling temp path: `dir/.name.tmp`
fn temp_path_for(target_path: &Path) -> PathBuf {
    let name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "storage".to_string());
    target_path.with_file_name(format!(".{}.tmp", name))
}

/// Atomically replace the contents of a file
///
/// Writes to a temp file in the same directory, then renames it over the
/// target, so the target holds either the old or the new content.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_storage_dir", e))?;
        }
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error("write_storage_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_storage_temp", e));
    }

    Ok(())
}

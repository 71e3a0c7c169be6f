// SPDX-License-Identifier: MPL-2.0
//! Filesystem helpers shared by the adapters.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path` through a sibling temp file and a rename, so a
/// crash mid-write never leaves a truncated file behind.
///
/// Creates the parent directory when missing.
///
/// # Errors
///
/// Returns an error if the directory, the temp file or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

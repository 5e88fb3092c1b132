//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Destination folder for a resolved playlist under the base directory.
pub fn playlist_folder(base: &Path, playlist_name: &str) -> Result<PathBuf> {
    let folder = sanitize_path_component(playlist_name)?;
    Ok(base.join(folder))
}

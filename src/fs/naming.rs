//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of the audio container produced by transcoding.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Derive the transcode output path by replacing the extension.
///
/// "1 - Title.webm" becomes "1 - Title.mp3"; a path without an extension
/// gets ".mp3" appended.
pub fn with_audio_extension(path: &Path) -> PathBuf {
    path.with_extension(AUDIO_EXTENSION)
}

/// Sanitize a path component (folder or file name).
///
/// Used for Spotify playlist names that become destination folders.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidPath(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidPath(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    // Sanitize problematic characters (replace with underscore)
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidPath(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

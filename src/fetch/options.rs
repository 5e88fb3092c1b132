//! Declarative download options translated into yt-dlp arguments.

use std::path::{Path, PathBuf};

use crate::fetch::events::PROGRESS_TEMPLATE;

/// Format selector for audio-only downloads.
pub const FORMAT_AUDIO: &str = "bestaudio/best";

/// Format selector for full video downloads.
pub const FORMAT_VIDEO: &str = "bestvideo+bestaudio/best";

/// Output template for collection (playlist) downloads.
const TEMPLATE_COLLECTION: &str = "%(playlist_title)s/%(playlist_index)s - %(title)s.%(ext)s";

/// Output template for single-item downloads.
const TEMPLATE_SINGLE: &str = "%(title)s.%(ext)s";

/// One download request. Immutable for the duration of one invocation.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// YouTube URL or a `ytsearch:` query.
    pub source: String,

    /// Directory the external tool writes into.
    pub destination: PathBuf,

    /// Keep only a transcoded audio track.
    pub audio_only: bool,

    /// Whether the source addresses an ordered set of items (playlist).
    pub is_collection: bool,
}

/// Declarative configuration for one yt-dlp invocation.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    output_template: PathBuf,
    format: &'static str,
    is_collection: bool,
    source: String,
}

impl DownloadOptions {
    /// Derive options from a request.
    pub fn for_request(request: &DownloadRequest) -> Self {
        let template = if request.is_collection {
            TEMPLATE_COLLECTION
        } else {
            TEMPLATE_SINGLE
        };

        Self {
            output_template: request.destination.join(template),
            format: if request.audio_only {
                FORMAT_AUDIO
            } else {
                FORMAT_VIDEO
            },
            is_collection: request.is_collection,
            source: request.source.clone(),
        }
    }

    /// The format selector passed to yt-dlp.
    pub fn format(&self) -> &str {
        self.format
    }

    /// The output filename template passed to yt-dlp.
    pub fn output_template(&self) -> &Path {
        &self.output_template
    }

    /// Render the full yt-dlp argument list.
    ///
    /// The fault-tolerance flags are always on so that one broken item in
    /// a collection does not abort the remaining items.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--newline".to_string(),
            "--progress".to_string(),
            "--no-warnings".to_string(),
            "--progress-template".to_string(),
            PROGRESS_TEMPLATE.to_string(),
            "-f".to_string(),
            self.format.to_string(),
            "--skip-unavailable-fragments".to_string(),
            "--ignore-errors".to_string(),
            "-o".to_string(),
            self.output_template.to_string_lossy().into_owned(),
        ];

        args.push(if self.is_collection {
            "--yes-playlist".to_string()
        } else {
            "--no-playlist".to_string()
        });

        args.push(self.source.clone());
        args
    }
}

//! Progress events reported by yt-dlp and the consumer seam.
//!
//! yt-dlp is started with `--newline` and a `--progress-template` that
//! renders every progress callback as a single machine-readable stdout
//! line. The Fetcher parses those lines into [`ProgressEvent`]s and hands
//! them to a [`ProgressConsumer`] injected at construction time.

use std::path::PathBuf;

use async_trait::async_trait;

/// Marker prefix for progress lines emitted by yt-dlp.
pub const PROGRESS_PREFIX: &str = "YTDL|";

/// Template passed to yt-dlp's `--progress-template` option.
pub const PROGRESS_TEMPLATE: &str =
    "download:YTDL|%(progress.status)s|%(progress.filename)s";

/// State of an item as reported by yt-dlp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Transfer in progress.
    Downloading,
    /// The item's file has been fully written.
    Finished,
    /// Any other status string yt-dlp may emit (e.g. "error").
    Other(String),
}

impl From<&str> for ProgressStatus {
    fn from(s: &str) -> Self {
        match s {
            "downloading" => ProgressStatus::Downloading,
            "finished" => ProgressStatus::Finished,
            other => ProgressStatus::Other(other.to_string()),
        }
    }
}

/// A per-item notification from the download tool. Transient, not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub status: ProgressStatus,
    pub filename: PathBuf,
}

impl ProgressEvent {
    pub fn is_finished(&self) -> bool {
        self.status == ProgressStatus::Finished
    }
}

/// Parse one yt-dlp stdout line into a progress event.
///
/// Returns `None` for lines that don't carry our progress marker (yt-dlp
/// prints plenty of informational output we don't care about).
pub fn parse_progress_line(line: &str) -> Option<ProgressEvent> {
    let rest = line.trim().strip_prefix(PROGRESS_PREFIX)?;
    let (status, filename) = rest.split_once('|')?;

    if filename.is_empty() {
        return None;
    }

    Some(ProgressEvent {
        status: ProgressStatus::from(status),
        filename: PathBuf::from(filename),
    })
}

/// Receiver for per-item progress events.
///
/// The production implementation is [`crate::transcode::PostProcessor`];
/// tests inject fakes to observe the Fetcher's dispatching.
#[async_trait]
pub trait ProgressConsumer: Send {
    async fn on_event(&mut self, event: ProgressEvent);
}

//! Download module built around an external yt-dlp process.
//!
//! This module provides:
//! - Declarative download options translated to yt-dlp arguments
//! - Progress event parsing and the consumer seam
//! - The Fetcher that drives one yt-dlp invocation per request
//! - Batch outcome reporting

pub mod events;
pub mod fetcher;
pub mod options;
pub mod report;

pub use events::{ProgressConsumer, ProgressEvent, ProgressStatus};
pub use fetcher::Fetcher;
pub use options::{DownloadOptions, DownloadRequest};
pub use report::FetchReport;

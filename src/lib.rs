//! YouTube Downloader - download videos and playlists through yt-dlp
//!
//! This library wraps two external tools: `yt-dlp` does the actual network
//! transfer, `ffmpeg` converts finished downloads to MP3 when audio-only
//! mode is requested.
//!
//! # Features
//!
//! - Download single videos or whole playlists
//! - Audio-only mode with post-download MP3 transcoding
//! - Spotify playlist resolution through YouTube search
//! - Dependency checking and installation via OS package managers
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use youtube_downloader::{DownloadRequest, Fetcher, PostProcessor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let post = PostProcessor::new(PathBuf::from("ffmpeg"), true);
//!     let mut fetcher = Fetcher::new(PathBuf::from("yt-dlp"), post);
//!
//!     let request = DownloadRequest {
//!         source: "https://www.youtube.com/watch?v=example".to_string(),
//!         destination: PathBuf::from("./downloads"),
//!         audio_only: true,
//!         is_collection: false,
//!     };
//!
//!     let report = fetcher.fetch(&request).await;
//!     println!("{} item(s) downloaded", report.completed);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod output;
pub mod spotify;
pub mod transcode;

// Re-exports for convenience
pub use config::{Config, SourceKind};
pub use error::{Error, Result};
pub use fetch::{DownloadRequest, FetchReport, Fetcher, ProgressConsumer, ProgressEvent};
pub use spotify::SpotifyApi;
pub use transcode::PostProcessor;

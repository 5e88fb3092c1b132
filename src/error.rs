//! Error types for the youtube-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Spotify API errors
    #[error("Spotify API error: {0}")]
    Spotify(String),

    #[error("Spotify authentication failed: {0}")]
    Authentication(String),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid path component: {0}")]
    InvalidPath(String),

    // External tool errors
    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("FFmpeg not found. Please install ffmpeg and ensure it's in your PATH.")]
    FFmpegNotFound,

    #[error("yt-dlp not found. Please install yt-dlp and ensure it's in your PATH.")]
    YtDlpNotFound,

    #[error("Dependency installation failed: {0}")]
    Install(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes reported by the CLI binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const SPOTIFY_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const DEPENDENCY_ERROR: i32 = 6;
}

//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, SourceKind};

/// YouTube downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "youtube-downloader",
    version,
    about = "Download YouTube videos or playlists",
    long_about = "A CLI tool to download YouTube videos and playlists through yt-dlp.\n\n\
                  Supports audio-only mode (MP3 via ffmpeg) and resolving Spotify\n\
                  playlists by re-searching each track on YouTube."
)]
pub struct Args {
    /// YouTube video or playlist URL, or a "ytsearch:" query.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Whether the URL addresses a single video or a playlist.
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<SourceKindArg>,

    /// Destination path for downloads.
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Keep only the audio of each item, transcoded to MP3.
    #[arg(short, long)]
    pub audio_only: bool,

    /// Spotify playlist (URL, URI or ID) to resolve through YouTube search.
    /// Implies audio-only mode.
    #[arg(long, conflicts_with = "url")]
    pub spotify_playlist: Option<String>,

    /// Spotify API client ID.
    #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    pub spotify_client_id: Option<String>,

    /// Spotify API client secret.
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Check for yt-dlp/ffmpeg and install missing ones via the OS
    /// package manager, then exit.
    #[arg(long)]
    pub install_deps: bool,

    /// Hide per-item download output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI source kind argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceKindArg {
    /// A single video.
    Video,
    /// A playlist of videos.
    Playlist,
}

impl From<SourceKindArg> for SourceKind {
    fn from(arg: SourceKindArg) -> Self {
        match arg {
            SourceKindArg::Video => SourceKind::Video,
            SourceKindArg::Playlist => SourceKind::Playlist,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(path) = &self.path {
            config.options.download_directory = Some(path.clone());
        }

        if let Some(kind) = self.kind {
            config.options.kind = kind.into();
        }

        // Boolean flags only override when set
        if self.audio_only {
            config.options.audio_only = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }

        if let Some(client_id) = &self.spotify_client_id {
            config.spotify.client_id = Some(client_id.clone());
        }

        if let Some(client_secret) = &self.spotify_client_secret {
            config.spotify.client_secret = Some(client_secret.clone());
        }
    }
}

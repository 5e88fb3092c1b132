//! Configuration structures and loading logic.

use crate::config::modes::SourceKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub spotify: SpotifyConfig,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Default source kind when the CLI does not specify one.
    #[serde(default)]
    pub kind: SourceKind,

    /// Keep only transcoded audio by default.
    #[serde(default)]
    pub audio_only: bool,

    /// Whether to show per-item download output.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            kind: SourceKind::default(),
            audio_only: false,
            show_downloads: true,
        }
    }
}

/// External tool locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Path to the yt-dlp binary. Defaults to PATH lookup.
    #[serde(default)]
    pub yt_dlp: Option<PathBuf>,

    /// Path to the ffmpeg binary. Defaults to PATH lookup.
    #[serde(default)]
    pub ffmpeg: Option<PathBuf>,
}

impl ToolsConfig {
    /// Program used to invoke the download tool.
    pub fn yt_dlp_program(&self) -> PathBuf {
        self.yt_dlp.clone().unwrap_or_else(|| PathBuf::from("yt-dlp"))
    }

    /// Program used to invoke the transcoding tool.
    pub fn ffmpeg_program(&self) -> PathBuf {
        self.ffmpeg.clone().unwrap_or_else(|| PathBuf::from("ffmpeg"))
    }
}

/// Spotify Web API credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Default destination when neither CLI nor config name one.
const DEFAULT_DOWNLOAD_DIR: &str = "./downloads";

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.download_directory(), PathBuf::from("./downloads"));
        assert_eq!(config.options.kind, SourceKind::Playlist);
        assert!(!config.options.audio_only);
        assert!(config.options.show_downloads);
        assert_eq!(config.tools.yt_dlp_program(), PathBuf::from("yt-dlp"));
        assert_eq!(config.tools.ffmpeg_program(), PathBuf::from("ffmpeg"));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[options]
download_directory = "/media/music"
audio_only = true

[tools]
ffmpeg = "/opt/ffmpeg/bin/ffmpeg"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.download_directory(), PathBuf::from("/media/music"));
        assert!(config.options.audio_only);
        assert_eq!(
            config.tools.ffmpeg_program(),
            PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        // Unset sections keep defaults
        assert_eq!(config.tools.yt_dlp_program(), PathBuf::from("yt-dlp"));
        assert!(config.spotify.client_id.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "options = not toml").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }
}

//! Source kind definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a source URL addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A single video.
    Video,
    /// An ordered collection of items addressed by one URL (default).
    #[default]
    Playlist,
}

impl SourceKind {
    /// Whether the download tool should expand the source into items.
    pub fn is_collection(&self) -> bool {
        matches!(self, SourceKind::Playlist)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Video => write!(f, "video"),
            SourceKind::Playlist => write!(f, "playlist"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(SourceKind::Video),
            "playlist" => Ok(SourceKind::Playlist),
            _ => Err(format!("Unknown source kind: {}", s)),
        }
    }
}

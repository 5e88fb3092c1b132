//! Spotify Web API response types.

use serde::Deserialize;

/// Client-credentials token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Error payload returned by the Web API.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

/// Playlist metadata (id + name only; tracks come from their own endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
}

/// One page of playlist entries.
#[derive(Debug, Deserialize)]
pub struct TrackPage {
    pub items: Vec<PlaylistEntry>,
    pub next: Option<String>,
}

/// A playlist entry. `track` is null for removed or local-only entries.
#[derive(Debug, Deserialize)]
pub struct PlaylistEntry {
    pub track: Option<Track>,
}

/// A track with its artists.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,

    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

impl Track {
    /// Build the YouTube search text for this track ("<title> <artist>").
    pub fn search_query(&self) -> String {
        match self.artists.first() {
            Some(artist) => format!("{} {}", self.name, artist.name),
            None => self.name.clone(),
        }
    }
}

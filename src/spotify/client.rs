//! Spotify Web API HTTP client.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::spotify::types::{ApiError, PlaylistInfo, TokenResponse, TrackPage, Track};

/// Spotify Web API base URL.
const API_BASE: &str = "https://api.spotify.com/v1";

/// Client-credentials token endpoint.
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify API client using the client-credentials flow.
///
/// Client credentials only grant access to public playlists, which is
/// enough for resolving a playlist into YouTube searches without an
/// interactive browser round-trip.
pub struct SpotifyApi {
    client: Client,
    token: String,
}

impl SpotifyApi {
    /// Create a new API client and obtain an access token.
    pub async fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Spotify(format!("Failed to create HTTP client: {}", e)))?;

        let response = client
            .post(TOKEN_URL)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication(format!(
                "HTTP {}: check spotify.client_id / spotify.client_secret",
                status
            )));
        }
        if !status.is_success() {
            return Err(Error::Spotify(format!("Token request failed: HTTP {}", status)));
        }

        let token: TokenResponse = response.json().await?;
        tracing::debug!(
            "Obtained {} token valid for {}s",
            token.token_type,
            token.expires_in
        );

        Ok(Self {
            client,
            token: token.access_token,
        })
    }

    /// Make an authenticated GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(Error::PlaylistNotFound(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The API wraps failures in a structured error object
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| format!("HTTP {}: {}", e.error.status, e.error.message))
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(Error::Spotify(message));
        }

        Ok(response.json().await?)
    }

    /// Fetch playlist metadata by ID.
    pub async fn playlist_info(&self, playlist_id: &str) -> Result<PlaylistInfo> {
        let url = format!("{}/playlists/{}?fields=id,name", API_BASE, playlist_id);
        self.get_json(&url).await
    }

    /// Fetch every track of a playlist, following pagination.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>> {
        let mut url = format!(
            "{}/playlists/{}/tracks?fields=items(track(name,artists(name))),next&limit=100",
            API_BASE, playlist_id
        );
        let mut tracks = Vec::new();

        loop {
            let page: TrackPage = self.get_json(&url).await?;

            for entry in page.items {
                match entry.track {
                    Some(track) => tracks.push(track),
                    // Removed or local-only entries have no track object
                    None => tracing::debug!("Skipping playlist entry without track data"),
                }
            }

            match page.next {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(tracks)
    }
}

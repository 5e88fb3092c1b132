//! Spotify playlist resolution.
//!
//! A Spotify playlist is resolved track by track into `ytsearch:` requests
//! against the [`Fetcher`], each downloaded audio-only into a folder named
//! after the playlist.

pub mod client;
pub mod types;

pub use client::SpotifyApi;
pub use types::{PlaylistInfo, Track};

use std::path::Path;

use crate::config::validation::parse_playlist_id;
use crate::error::Result;
use crate::fetch::{DownloadRequest, FetchReport, Fetcher, ProgressConsumer};
use crate::fs::paths::playlist_folder;

/// Download every track of a Spotify playlist by re-searching it on YouTube.
///
/// Playlist lookup failures are typed errors (nothing has been handed to
/// the download tool yet); per-track download failures follow the usual
/// best-effort policy and only show up in the report.
pub async fn download_spotify_playlist<C: ProgressConsumer>(
    api: &SpotifyApi,
    fetcher: &mut Fetcher<C>,
    playlist: &str,
    destination: &Path,
) -> Result<FetchReport> {
    let playlist_id = parse_playlist_id(playlist)?;
    let info = api.playlist_info(&playlist_id).await?;
    let tracks = api.playlist_tracks(&playlist_id).await?;

    tracing::info!("Resolved playlist '{}' ({} tracks)", info.name, tracks.len());

    let folder = playlist_folder(destination, &info.name)?;
    let mut report = FetchReport::default();

    for track in &tracks {
        let query = track.search_query();
        tracing::info!("Downloading '{}' from YouTube", query);

        let request = DownloadRequest {
            source: format!("ytsearch:{}", query),
            destination: folder.clone(),
            audio_only: true,
            is_collection: false,
        };

        report.merge(&fetcher.fetch(&request).await);
    }

    Ok(report)
}

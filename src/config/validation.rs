//! Configuration validation logic.

use crate::config::loader::SpotifyConfig;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate a download source: an http(s) URL or a yt-dlp search query.
pub fn validate_source(source: &str) -> Result<()> {
    let source = source.trim();

    if source.is_empty() {
        return Err(Error::MissingConfig("url".to_string()));
    }

    // yt-dlp search prefixes: ytsearch:, ytsearchN:, ytsearchall:
    if source.starts_with("ytsearch") {
        let search_pattern = Regex::new(r"^ytsearch(\d+|all)?:\S").unwrap();
        if !search_pattern.is_match(source) {
            return Err(Error::ConfigValidation {
                field: "url".to_string(),
                message: format!("Invalid search query: '{}'", source),
            });
        }
        return Ok(());
    }

    let parsed = url::Url::parse(source)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Unsupported URL scheme: '{}'", parsed.scheme()),
        });
    }

    Ok(())
}

/// Validate Spotify credentials before the Spotify path is taken.
pub fn validate_spotify_credentials(spotify: &SpotifyConfig) -> Result<(String, String)> {
    let client_id = spotify
        .client_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            Error::MissingConfig("spotify.client_id (or SPOTIFY_CLIENT_ID)".to_string())
        })?;

    let client_secret = spotify
        .client_secret
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            Error::MissingConfig("spotify.client_secret (or SPOTIFY_CLIENT_SECRET)".to_string())
        })?;

    Ok((client_id.to_string(), client_secret.to_string()))
}

/// Extract a Spotify playlist ID from a URL, URI or direct ID string.
pub fn parse_playlist_id(input: &str) -> Result<String> {
    let input = input.trim();

    // Pattern: https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=...
    if input.starts_with("http://") || input.starts_with("https://") {
        let url_pattern = Regex::new(r"/playlist/([A-Za-z0-9]{16,32})").unwrap();

        if let Some(captures) = url_pattern.captures(input) {
            if let Some(id) = captures.get(1) {
                return Ok(id.as_str().to_string());
            }
        }

        return Err(Error::ConfigValidation {
            field: "spotify_playlist".to_string(),
            message: format!("Could not extract playlist ID from URL: {}", input),
        });
    }

    // Pattern: spotify:playlist:37i9dQZF1DXcBWIGoYBM5M
    if let Some(id) = input.strip_prefix("spotify:playlist:") {
        let id_pattern = Regex::new(r"^[A-Za-z0-9]{16,32}$").unwrap();
        if id_pattern.is_match(id) {
            return Ok(id.to_string());
        }
    }

    // Direct ID
    let id_pattern = Regex::new(r"^[A-Za-z0-9]{16,32}$").unwrap();
    if id_pattern.is_match(input) {
        return Ok(input.to_string());
    }

    Err(Error::ConfigValidation {
        field: "spotify_playlist".to_string(),
        message: format!(
            "Invalid playlist: '{}'. Use a Spotify playlist URL, URI or ID.",
            input
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source_urls() {
        assert!(validate_source("https://www.youtube.com/watch?v=abc").is_ok());
        assert!(validate_source("http://example.com/watch?v=abc").is_ok());
        assert!(validate_source("ftp://example.com/video").is_err());
        assert!(validate_source("not a url").is_err());
        assert!(validate_source("").is_err());
    }

    #[test]
    fn test_validate_source_search_queries() {
        assert!(validate_source("ytsearch:never gonna give you up").is_ok());
        assert!(validate_source("ytsearch5:lofi beats").is_ok());
        assert!(validate_source("ytsearchall:concert").is_ok());
        assert!(validate_source("ytsearch:").is_err());
        assert!(validate_source("ytsearchfoo:query").is_err());
    }

    #[test]
    fn test_validate_spotify_credentials() {
        let full = SpotifyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
        };
        assert_eq!(
            validate_spotify_credentials(&full).unwrap(),
            ("id".to_string(), "secret".to_string())
        );

        let missing = SpotifyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("  ".to_string()),
        };
        assert!(validate_spotify_credentials(&missing).is_err());
        assert!(validate_spotify_credentials(&SpotifyConfig::default()).is_err());
    }

    #[test]
    fn test_parse_playlist_id_direct() {
        assert_eq!(
            parse_playlist_id("37i9dQZF1DXcBWIGoYBM5M").unwrap(),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
    }

    #[test]
    fn test_parse_playlist_id_url() {
        let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=xyz";
        assert_eq!(parse_playlist_id(url).unwrap(), "37i9dQZF1DXcBWIGoYBM5M");
    }

    #[test]
    fn test_parse_playlist_id_uri() {
        assert_eq!(
            parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap(),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
    }

    #[test]
    fn test_parse_playlist_id_invalid() {
        assert!(parse_playlist_id("short").is_err());
        assert!(parse_playlist_id("https://open.spotify.com/track/abc").is_err());
        assert!(parse_playlist_id("has spaces in it definitely").is_err());
    }
}

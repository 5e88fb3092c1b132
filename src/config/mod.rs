//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging (see [`crate::cli`])
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, SpotifyConfig, ToolsConfig};
pub use modes::SourceKind;
pub use validation::{parse_playlist_id, validate_source, validate_spotify_credentials};

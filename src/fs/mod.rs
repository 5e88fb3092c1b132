//! File system helpers: paths and filename handling.

pub mod naming;
pub mod paths;

pub use naming::{sanitize_path_component, with_audio_extension};
pub use paths::{ensure_dir, playlist_folder};

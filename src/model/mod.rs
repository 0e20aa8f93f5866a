//! Unified data model for the video catalog
//!
//! This module defines the records the player operates on: videos,
//! named playlists, and the id-indexed library that holds the videos.

mod library;
mod playlist;
mod video;

pub use library::Library;
pub use playlist::Playlist;
pub use video::Video;

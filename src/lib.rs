//! Tube Player - command-driven video catalog and playlist console
//!
//! An in-memory simulation of a video player: a fixed library of
//! videos, playback state, named playlists, search and flagging,
//! all driven by textual commands.

pub mod command;
pub mod model;
pub mod picker;
pub mod player;

pub use model::Library;
pub use player::VideoPlayer;

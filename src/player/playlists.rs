//! Playlist operations
//!
//! Playlists are keyed by lowercased title, so two names differing only
//! in case refer to the same playlist. Status messages echo the name in
//! the form the user typed it.

use super::{PlayerError, VideoPlayer};
use crate::model::Playlist;
use crate::picker::VideoPicker;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write, P: VideoPicker> VideoPlayer<R, W, P> {
    /// Create a new empty playlist
    pub fn create_playlist(&mut self, playlist_name: &str) -> Result<()> {
        let key = playlist_name.to_lowercase();
        if self.playlists.contains_key(&key) {
            writeln!(
                self.out,
                "Cannot create playlist: {}",
                PlayerError::DuplicatePlaylist
            )?;
        } else {
            let playlist = Playlist::new(playlist_name);
            writeln!(
                self.out,
                "Successfully created new playlist: {}",
                playlist.title()
            )?;
            self.playlists.insert(key, playlist);
        }
        Ok(())
    }

    /// Add a video to a playlist
    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Result<()> {
        match self.try_add(playlist_name, video_id) {
            Ok(title) => writeln!(self.out, "Added video to {playlist_name}: {title}")?,
            Err(err) => writeln!(self.out, "Cannot add video to {playlist_name}: {err}")?,
        }
        Ok(())
    }

    // Check order matters: playlist, then video, then flag state, then
    // duplicate membership.
    fn try_add(&mut self, playlist_name: &str, video_id: &str) -> Result<String, PlayerError> {
        let key = playlist_name.to_lowercase();
        if !self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistNotFound);
        }
        let video = self.library.get(video_id).ok_or(PlayerError::VideoNotFound)?;
        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::VideoFlagged(reason.to_string()));
        }
        let title = video.title().to_string();
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or(PlayerError::PlaylistNotFound)?;
        if !playlist.add(video_id) {
            return Err(PlayerError::VideoAlreadyAdded);
        }
        Ok(title)
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, playlist_name: &str, video_id: &str) -> Result<()> {
        match self.try_remove(playlist_name, video_id) {
            Ok(title) => writeln!(self.out, "Removed video from {playlist_name}: {title}")?,
            Err(err) => writeln!(self.out, "Cannot remove video from {playlist_name}: {err}")?,
        }
        Ok(())
    }

    fn try_remove(&mut self, playlist_name: &str, video_id: &str) -> Result<String, PlayerError> {
        let key = playlist_name.to_lowercase();
        if !self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistNotFound);
        }
        let video = self.library.get(video_id).ok_or(PlayerError::VideoNotFound)?;
        let title = video.title().to_string();
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or(PlayerError::PlaylistNotFound)?;
        if !playlist.remove(video_id) {
            return Err(PlayerError::VideoNotInPlaylist);
        }
        Ok(title)
    }

    /// List playlist titles in sorted key order
    pub fn show_all_playlists(&mut self) -> Result<()> {
        if self.playlists.is_empty() {
            writeln!(self.out, "No playlists exist yet")?;
            return Ok(());
        }
        writeln!(self.out, "Showing all playlists:")?;
        for playlist in self.playlists.values() {
            writeln!(self.out, "{}", playlist.title())?;
        }
        Ok(())
    }

    /// List the videos of one playlist in playlist order
    pub fn show_playlist(&mut self, playlist_name: &str) -> Result<()> {
        let key = playlist_name.to_lowercase();
        let Some(playlist) = self.playlists.get(&key) else {
            writeln!(
                self.out,
                "Cannot show playlist {playlist_name}: {}",
                PlayerError::PlaylistNotFound
            )?;
            return Ok(());
        };

        writeln!(self.out, "Showing playlist: {playlist_name}")?;
        if playlist.is_empty() {
            writeln!(self.out, "No videos here yet")?;
            return Ok(());
        }
        for video_id in playlist.video_ids() {
            if let Some(video) = self.library.get(video_id) {
                writeln!(self.out, "{video}")?;
            }
        }
        Ok(())
    }

    /// Empty a playlist, keeping the playlist itself
    pub fn clear_playlist(&mut self, playlist_name: &str) -> Result<()> {
        let key = playlist_name.to_lowercase();
        match self.playlists.get_mut(&key) {
            Some(playlist) => {
                playlist.clear();
                writeln!(
                    self.out,
                    "Successfully removed all videos from {playlist_name}"
                )?;
            }
            None => {
                writeln!(
                    self.out,
                    "Cannot clear playlist {playlist_name}: {}",
                    PlayerError::PlaylistNotFound
                )?;
            }
        }
        Ok(())
    }

    /// Delete a playlist; its key becomes reusable
    pub fn delete_playlist(&mut self, playlist_name: &str) -> Result<()> {
        let key = playlist_name.to_lowercase();
        if self.playlists.remove(&key).is_some() {
            writeln!(self.out, "Deleted playlist: {playlist_name}")?;
        } else {
            writeln!(
                self.out,
                "Cannot delete playlist {playlist_name}: {}",
                PlayerError::PlaylistNotFound
            )?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// Represents a named playlist
///
/// Videos are referenced by id, kept in insertion order with no duplicates.
/// Case-insensitive identity of the playlist itself is handled by the player,
/// which keys its playlist map by lowercased title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist title in the form the user gave it
    title: String,

    /// Video ids (ordered)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_ids: Vec::new(),
        }
    }

    /// Display title as given at creation
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Video ids in playlist order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Whether the given video id is already in the playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video id if not already present; returns whether it was added
    pub fn add(&mut self, video_id: impl Into<String>) -> bool {
        let video_id = video_id.into();
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video id; returns whether it was present
    pub fn remove(&mut self, video_id: &str) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|id| id != video_id);
        self.video_ids.len() != before
    }

    /// Remove all videos, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

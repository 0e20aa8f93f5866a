use super::Video;
use std::collections::HashMap;

/// Video library: every video the player can know about, indexed by id
///
/// The library is populated up front and stays fixed for the life of the
/// process; flag state on the contained videos is the only thing that
/// changes after construction.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// The built-in sample catalog the binary starts with
    pub fn demo() -> Self {
        let mut library = Self::new();
        library.add(Video::new(
            "Funny Dogs",
            "funny_dogs_video_id",
            ["#dog", "#animal"],
        ));
        library.add(Video::new(
            "Amazing Cats",
            "amazing_cats_video_id",
            ["#cat", "#animal"],
        ));
        library.add(Video::new(
            "Another Cat Video",
            "another_cat_video_id",
            ["#cat", "#animal"],
        ));
        library.add(Video::new(
            "Life at Google",
            "life_at_google_video_id",
            ["#google", "#career"],
        ));
        library.add(Video::new(
            "Video about nothing",
            "nothing_video_id",
            Vec::<String>::new(),
        ));
        library
    }

    /// Add a video to the library
    pub fn add(&mut self, video: Video) {
        self.videos.insert(video.id().to_string(), video);
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Get a video by ID for flag mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// Get all videos
    pub fn all_videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

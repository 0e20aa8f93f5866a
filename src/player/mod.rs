//! The video player: playback state, playlists, search and flagging
//!
//! Every user-facing operation lives here. Each one validates its
//! preconditions, mutates in-memory state and writes exactly one status
//! line (or a short listing) to the output stream. Precondition failures
//! are reported as text and never escape the player; only I/O errors on
//! the console streams propagate.

mod error;
mod flags;
mod playlists;
mod search;

pub use error::PlayerError;

use crate::model::{Library, Playlist, Video};
use crate::picker::VideoPicker;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Playback position: which video, and whether it is paused
#[derive(Debug, Clone)]
struct NowPlaying {
    video_id: String,
    paused: bool,
}

/// Command-driven video player over an in-memory library
///
/// Generic over its console streams and the random-selection source so
/// tests can drive it with an in-memory reader/writer and a
/// deterministic picker.
pub struct VideoPlayer<R, W, P> {
    library: Library,

    /// Playlists keyed by lowercased title; the map order is the
    /// sorted-by-key order every playlist listing uses.
    playlists: BTreeMap<String, Playlist>,

    now_playing: Option<NowPlaying>,

    picker: P,

    input: R,
    out: W,
}

impl<R: BufRead, W: Write, P: VideoPicker> VideoPlayer<R, W, P> {
    /// Create a player over a pre-populated library
    pub fn new(library: Library, picker: P, input: R, out: W) -> Self {
        Self {
            library,
            playlists: BTreeMap::new(),
            now_playing: None,
            picker,
            input,
            out,
        }
    }

    /// The library this player reads from
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Consume the player and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read one line from the player's input stream
    ///
    /// Returns `None` at end of input. Used by the command loop and by
    /// the interactive part of search.
    pub fn read_input_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Write one line to the player's output stream
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Report how many videos the library holds
    pub fn number_of_videos(&mut self) -> Result<()> {
        writeln!(self.out, "{} videos in the library", self.library.len())?;
        Ok(())
    }

    /// List every video, sorted by its display string
    pub fn show_all_videos(&mut self) -> Result<()> {
        writeln!(self.out, "Here's a list of all available videos:")?;
        let mut lines: Vec<String> =
            self.library.all_videos().map(|v| v.to_string()).collect();
        lines.sort();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Play a video by id, stopping whatever is playing first
    ///
    /// Re-playing the id that is already playing performs the same
    /// stop-then-play sequence; that restart is intended behavior.
    pub fn play_video(&mut self, video_id: &str) -> Result<()> {
        let checked = match self.library.get(video_id) {
            None => Err(PlayerError::VideoNotFound),
            Some(video) => match video.flag_reason() {
                Some(reason) => Err(PlayerError::VideoFlagged(reason.to_string())),
                None => Ok((video.id().to_string(), video.title().to_string())),
            },
        };

        match checked {
            Err(err) => writeln!(self.out, "Cannot play video: {err}")?,
            Ok((id, title)) => {
                self.stop_current()?;
                self.now_playing = Some(NowPlaying {
                    video_id: id,
                    paused: false,
                });
                writeln!(self.out, "Playing video: {title}")?;
            }
        }
        Ok(())
    }

    /// Stop the current video
    pub fn stop_video(&mut self) -> Result<()> {
        if self.now_playing.is_some() {
            self.stop_current()?;
        } else {
            writeln!(self.out, "Cannot stop video: {}", PlayerError::NothingPlaying)?;
        }
        Ok(())
    }

    /// Play a uniformly chosen non-flagged video
    pub fn play_random_video(&mut self) -> Result<()> {
        let mut candidates: Vec<String> = self
            .library
            .all_videos()
            .filter(|v| !v.is_flagged())
            .map(|v| v.id().to_string())
            .collect();

        if candidates.is_empty() {
            writeln!(self.out, "No videos available")?;
            return Ok(());
        }

        // Map iteration order is unspecified; give the picker a stable
        // candidate list.
        candidates.sort();
        let index = self.picker.pick(candidates.len());
        let video_id = candidates.swap_remove(index);
        self.play_video(&video_id)
    }

    /// Pause the current video (idempotent when already paused)
    pub fn pause_video(&mut self) -> Result<()> {
        match self.now_playing.as_mut() {
            None => {
                writeln!(self.out, "Cannot pause video: {}", PlayerError::NothingPlaying)?;
            }
            Some(playing) => {
                let title = self
                    .library
                    .get(&playing.video_id)
                    .map(|v| v.title())
                    .unwrap_or(playing.video_id.as_str());
                if playing.paused {
                    writeln!(self.out, "Video already paused: {title}")?;
                } else {
                    playing.paused = true;
                    writeln!(self.out, "Pausing video: {title}")?;
                }
            }
        }
        Ok(())
    }

    /// Resume a paused video
    pub fn continue_video(&mut self) -> Result<()> {
        match self.now_playing.as_mut() {
            None => {
                writeln!(self.out, "Cannot continue video: {}", PlayerError::NothingPlaying)?;
            }
            Some(playing) if !playing.paused => {
                writeln!(self.out, "Cannot continue video: {}", PlayerError::NotPaused)?;
            }
            Some(playing) => {
                playing.paused = false;
                let title = self
                    .library
                    .get(&playing.video_id)
                    .map(|v| v.title())
                    .unwrap_or(playing.video_id.as_str());
                writeln!(self.out, "Continuing video: {title}")?;
            }
        }
        Ok(())
    }

    /// Show the current video's display string, with a paused marker
    pub fn show_playing(&mut self) -> Result<()> {
        let message = match self.current_video() {
            Some(video) => {
                let suffix = if self.is_paused() { " - PAUSED" } else { "" };
                format!("Currently playing: {video}{suffix}")
            }
            None => PlayerError::NothingPlaying.to_string(),
        };
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Stop playback if anything is playing, emitting the stop line
    fn stop_current(&mut self) -> Result<()> {
        if let Some(playing) = self.now_playing.take() {
            let title = self
                .library
                .get(&playing.video_id)
                .map(|v| v.title())
                .unwrap_or(playing.video_id.as_str());
            writeln!(self.out, "Stopping video: {title}")?;
        }
        Ok(())
    }

    fn current_video(&self) -> Option<&Video> {
        self.now_playing
            .as_ref()
            .and_then(|playing| self.library.get(&playing.video_id))
    }

    fn is_paused(&self) -> bool {
        self.now_playing.as_ref().is_some_and(|playing| playing.paused)
    }
}

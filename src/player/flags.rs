//! Flagging: marking videos unplayable and allowing them again

use super::{PlayerError, VideoPlayer};
use crate::picker::VideoPicker;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Reason recorded when the user flags a video without giving one
const DEFAULT_FLAG_REASON: &str = "Not supplied";

impl<R: BufRead, W: Write, P: VideoPicker> VideoPlayer<R, W, P> {
    /// Flag a video, stopping it first if it is the one playing
    pub fn flag_video(&mut self, video_id: &str, flag_reason: Option<&str>) -> Result<()> {
        let checked = match self.library.get(video_id) {
            None => Err(PlayerError::VideoNotFound),
            Some(video) if video.is_flagged() => Err(PlayerError::AlreadyFlagged),
            Some(_) => Ok(()),
        };
        if let Err(err) = checked {
            writeln!(self.out, "Cannot flag video: {err}")?;
            return Ok(());
        }

        let is_playing = self
            .now_playing
            .as_ref()
            .is_some_and(|playing| playing.video_id.eq_ignore_ascii_case(video_id));
        if is_playing {
            self.stop_current()?;
        }

        let reason = match flag_reason {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };
        if let Some(video) = self.library.get_mut(video_id) {
            video.set_flag(reason.clone());
            writeln!(
                self.out,
                "Successfully flagged video: {} (reason: {reason})",
                video.title()
            )?;
        }
        Ok(())
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str) -> Result<()> {
        match self.library.get_mut(video_id) {
            None => {
                writeln!(
                    self.out,
                    "Cannot remove flag from video: {}",
                    PlayerError::VideoNotFound
                )?;
            }
            Some(video) if !video.is_flagged() => {
                writeln!(
                    self.out,
                    "Cannot remove flag from video: {}",
                    PlayerError::NotFlagged
                )?;
            }
            Some(video) => {
                video.clear_flag();
                writeln!(
                    self.out,
                    "Successfully removed flag from video: {}",
                    video.title()
                )?;
            }
        }
        Ok(())
    }
}

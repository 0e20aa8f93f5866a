//! Search over the library, with interactive play-by-number selection
//!
//! Results keep `(display string, id)` pairs, so the id played after a
//! selection comes straight from the match and is never parsed back out
//! of the formatted text. Flagged videos never appear in results.

use super::VideoPlayer;
use crate::model::Video;
use crate::picker::VideoPicker;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write, P: VideoPicker> VideoPlayer<R, W, P> {
    /// Case-insensitive substring search over video titles
    pub fn search_videos(&mut self, search_term: &str) -> Result<()> {
        let needle = search_term.to_lowercase();
        let matches = self.collect_matches(|video| video.title().to_lowercase().contains(&needle));
        self.present_results(search_term, matches)
    }

    /// Exact case-insensitive match against any video tag
    pub fn search_videos_with_tag(&mut self, video_tag: &str) -> Result<()> {
        let matches = self.collect_matches(|video| {
            video.tags().iter().any(|tag| tag.eq_ignore_ascii_case(video_tag))
        });
        self.present_results(video_tag, matches)
    }

    /// Matching non-flagged videos as (display, id) pairs, sorted by
    /// display string — the numbering users see runs over this order.
    fn collect_matches(&self, matcher: impl Fn(&Video) -> bool) -> Vec<(String, String)> {
        let mut matches: Vec<(String, String)> = self
            .library
            .all_videos()
            .filter(|video| !video.is_flagged())
            .filter(|video| matcher(video))
            .map(|video| (video.to_string(), video.id().to_string()))
            .collect();
        matches.sort();
        matches
    }

    fn present_results(&mut self, query: &str, matches: Vec<(String, String)>) -> Result<()> {
        if matches.is_empty() {
            writeln!(self.out, "No search results for {query}")?;
            return Ok(());
        }

        writeln!(self.out, "Here are the results for {query}:")?;
        for (i, (display, _)) in matches.iter().enumerate() {
            writeln!(self.out, "{}) {display}", i + 1)?;
        }
        writeln!(
            self.out,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            self.out,
            "If your answer is not a valid number, we will assume it's a no."
        )?;

        // Anything that is not a number in [1, N] counts as "no".
        let Some(answer) = self.read_input_line()? else {
            return Ok(());
        };
        if let Ok(choice) = answer.trim().parse::<usize>() {
            if (1..=matches.len()).contains(&choice) {
                let (_, video_id) = &matches[choice - 1];
                let video_id = video_id.clone();
                self.play_video(&video_id)?;
            }
        }
        Ok(())
    }
}

//! Read-eval-print loop driving the player
//!
//! Reads one command per line from the player's input stream until EXIT
//! or end of input. Search's interactive selection consumes its answer
//! line from the same stream.

use super::{Command, HELP_TEXT};
use crate::picker::VideoPicker;
use crate::player::VideoPlayer;
use anyhow::Result;
use std::io::{BufRead, Write};

const GREETING: &str = "Hello and welcome to the video player, what would you like to do? \
Enter HELP for a list of available commands or EXIT to terminate.";

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Run the command loop until EXIT or end of input
pub fn run<R: BufRead, W: Write, P: VideoPicker>(player: &mut VideoPlayer<R, W, P>) -> Result<()> {
    player.write_line(GREETING)?;
    while let Some(line) = player.read_input_line()? {
        match Command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => dispatch(player, command)?,
            Err(err) => {
                log::debug!("rejected command line: {err}");
                player.write_line(INVALID_COMMAND)?;
            }
        }
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write, P: VideoPicker>(
    player: &mut VideoPlayer<R, W, P>,
    command: Command,
) -> Result<()> {
    match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play { video_id } => player.play_video(&video_id),
        Command::PlayRandom => player.play_random_video(),
        Command::Stop => player.stop_video(),
        Command::Pause => player.pause_video(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => player.show_playing(),
        Command::CreatePlaylist { name } => player.create_playlist(&name),
        Command::AddToPlaylist { name, video_id } => player.add_to_playlist(&name, &video_id),
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::ShowPlaylist { name } => player.show_playlist(&name),
        Command::RemoveFromPlaylist { name, video_id } => {
            player.remove_from_playlist(&name, &video_id)
        }
        Command::ClearPlaylist { name } => player.clear_playlist(&name),
        Command::DeletePlaylist { name } => player.delete_playlist(&name),
        Command::SearchVideos { term } => player.search_videos(&term),
        Command::SearchVideosWithTag { tag } => player.search_videos_with_tag(&tag),
        Command::FlagVideo { video_id, reason } => {
            player.flag_video(&video_id, reason.as_deref())
        }
        Command::AllowVideo { video_id } => player.allow_video(&video_id),
        Command::Help => player.write_line(HELP_TEXT),
        // EXIT is handled by the loop itself
        Command::Exit => Ok(()),
    }
}

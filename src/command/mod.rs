//! Textual command surface
//!
//! Parses one line of user input into a `Command`. Command words are
//! case-insensitive; arguments keep the case the user typed.

pub mod repl;

use thiserror::Error;

/// One parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Why a command line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected}")]
    WrongArguments {
        command: String,
        expected: &'static str,
    },
}

/// Usage listing printed by HELP
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays the specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stops the current video.
    PAUSE - Pauses the current video.
    CONTINUE - Resumes the current paused video.
    SHOW_PLAYING - Displays the video that is currently playing.
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the video from the playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - Lists all videos in the playlist.
    SHOW_ALL_PLAYLISTS - Displays all available playlists.
    SEARCH_VIDEOS <search_term> - Displays all videos whose titles contain the search term.
    SEARCH_VIDEOS_WITH_TAG <tag> - Displays all videos with the given tag.
    FLAG_VIDEO <video_id> [reason] - Marks a video as flagged.
    ALLOW_VIDEO <video_id> - Removes the flag from a video.
    HELP - Displays this help.
    EXIT - Terminates the program.";

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Err(ParseError::Empty);
        };
        let args: Vec<&str> = tokens.collect();
        let word = word.to_uppercase();

        let command = match word.as_str() {
            "NUMBER_OF_VIDEOS" => no_args(&word, &args, Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args(&word, &args, Command::ShowAllVideos)?,
            "PLAY" => Command::Play {
                video_id: one_arg(&word, &args, "a video id")?,
            },
            "PLAY_RANDOM" => no_args(&word, &args, Command::PlayRandom)?,
            "STOP" => no_args(&word, &args, Command::Stop)?,
            "PAUSE" => no_args(&word, &args, Command::Pause)?,
            "CONTINUE" => no_args(&word, &args, Command::Continue)?,
            "SHOW_PLAYING" => no_args(&word, &args, Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: one_arg(&word, &args, "a playlist name")?,
            },
            "ADD_TO_PLAYLIST" => {
                let (name, video_id) = two_args(&word, &args, "a playlist name and a video id")?;
                Command::AddToPlaylist { name, video_id }
            }
            "SHOW_ALL_PLAYLISTS" => no_args(&word, &args, Command::ShowAllPlaylists)?,
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: one_arg(&word, &args, "a playlist name")?,
            },
            "REMOVE_FROM_PLAYLIST" => {
                let (name, video_id) = two_args(&word, &args, "a playlist name and a video id")?;
                Command::RemoveFromPlaylist { name, video_id }
            }
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: one_arg(&word, &args, "a playlist name")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: one_arg(&word, &args, "a playlist name")?,
            },
            // Search terms and flag reasons are free-form; the remainder
            // of the line is the argument.
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: rest_arg(&word, &args, "a search term")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: rest_arg(&word, &args, "a tag")?,
            },
            "FLAG_VIDEO" => {
                let Some((video_id, reason)) = args.split_first() else {
                    return Err(ParseError::WrongArguments {
                        command: word.clone(),
                        expected: "a video id and an optional reason",
                    });
                };
                Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: if reason.is_empty() {
                        None
                    } else {
                        Some(reason.join(" "))
                    },
                }
            }
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: one_arg(&word, &args, "a video id")?,
            },
            "HELP" => no_args(&word, &args, Command::Help)?,
            "EXIT" => no_args(&word, &args, Command::Exit)?,
            _ => return Err(ParseError::UnknownCommand(word.clone())),
        };
        Ok(command)
    }
}

fn no_args(word: &str, args: &[&str], command: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::WrongArguments {
            command: word.to_string(),
            expected: "no arguments",
        })
    }
}

fn one_arg(word: &str, args: &[&str], expected: &'static str) -> Result<String, ParseError> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(ParseError::WrongArguments {
            command: word.to_string(),
            expected,
        }),
    }
}

fn two_args(
    word: &str,
    args: &[&str],
    expected: &'static str,
) -> Result<(String, String), ParseError> {
    match args {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(ParseError::WrongArguments {
            command: word.to_string(),
            expected,
        }),
    }
}

fn rest_arg(word: &str, args: &[&str], expected: &'static str) -> Result<String, ParseError> {
    if args.is_empty() {
        Err(ParseError::WrongArguments {
            command: word.to_string(),
            expected,
        })
    } else {
        Ok(args.join(" "))
    }
}

use thiserror::Error;

/// Precondition failures for player commands
///
/// The display text of each variant is the reason fragment the original
/// console prints after its `Cannot <do thing>:` prefix, so commands can
/// report failures as `"Cannot play video: {err}"` and match the expected
/// output exactly. These never escape the player; every command swallows
/// them into a status line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    #[error("Video already added")]
    VideoAlreadyAdded,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

//! Failure kinds shared by playback, playlists and search.
//!
//! The `Display` text is the reason half of a user-facing
//! `Cannot <action>: <reason>` line; the action half is added by the caller.

/// Why a playback command does not apply to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackFault {
  #[error("No video is currently playing")]
  NoVideoPlaying,
  #[error("Video is not paused")]
  NotPaused,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("Video does not exist")]
  VideoNotFound(String),

  #[error("Playlist does not exist")]
  PlaylistNotFound(String),

  #[error("A playlist with the same name already exists")]
  AlreadyExists(String),

  #[error("Video already added")]
  DuplicateVideo(String),

  #[error("Video is not in playlist")]
  VideoNotInPlaylist(String),

  #[error("{0}")]
  IllegalState(PlaybackFault),

  #[error("No videos available")]
  EmptyCatalog,

  #[error("{0} is not supported yet")]
  NotImplemented(&'static str),
}

impl Error {
  /// The video id or playlist name the failure is about, if any.
  pub fn subject(&self) -> Option<&str> {
    match self {
      Error::VideoNotFound(s)
      | Error::PlaylistNotFound(s)
      | Error::AlreadyExists(s)
      | Error::DuplicateVideo(s)
      | Error::VideoNotInPlaylist(s) => Some(s),
      Error::IllegalState(_) | Error::EmptyCatalog | Error::NotImplemented(_) => None,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;

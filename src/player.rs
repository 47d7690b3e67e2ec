use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::catalog::{Video, VideoCatalog};
use crate::error::{Error, PlaybackFault, Result};

/// The one video the player is currently on, if any.
///
/// There is no queue: starting a video always replaces the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
  #[default]
  NoVideo,
  Playing(Video),
  Paused(Video),
}

impl PlaybackState {
  pub fn current(&self) -> Option<&Video> {
    match self {
      PlaybackState::NoVideo => None,
      PlaybackState::Playing(v) | PlaybackState::Paused(v) => Some(v),
    }
  }
}

/// Outcome of a successful `play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
  /// The video that was interrupted, paused or not.
  pub stopped: Option<Video>,
  pub started: Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseReport {
  Paused(Video),
  /// Already paused; nothing changed.
  AlreadyPaused(Video),
}

/// Snapshot returned by [`VideoPlayer::now_playing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowPlaying<'a> {
  Nothing,
  Playing(&'a Video),
  Paused(&'a Video),
}

/// Owns the playback state machine. Every method either applies a whole
/// transition or returns an error with the state untouched.
#[derive(Debug, Default)]
pub struct VideoPlayer {
  state: PlaybackState,
}

impl VideoPlayer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> &PlaybackState {
    &self.state
  }

  pub fn is_playing(&self) -> bool {
    self.state.current().is_some()
  }

  pub fn play<C: VideoCatalog + ?Sized>(&mut self, catalog: &C, id: &str) -> Result<PlayReport> {
    let video = catalog.get_video(id).ok_or_else(|| Error::VideoNotFound(id.to_string()))?.clone();
    let stopped = match std::mem::take(&mut self.state) {
      PlaybackState::NoVideo => None,
      PlaybackState::Playing(v) | PlaybackState::Paused(v) => {
        debug!(video_id = %v.id, "playback: stopping previous video");
        Some(v)
      }
    };
    info!(video_id = %video.id, "playback: playing");
    self.state = PlaybackState::Playing(video.clone());
    Ok(PlayReport { stopped, started: video })
  }

  /// Pick any catalog video uniformly, the current one included, and play it.
  pub fn play_random<C, R>(&mut self, catalog: &C, rng: &mut R) -> Result<PlayReport>
  where
    C: VideoCatalog + ?Sized,
    R: Rng + ?Sized,
  {
    let id = catalog.all_videos().choose(rng).map(|v| v.id.clone()).ok_or(Error::EmptyCatalog)?;
    debug!(video_id = %id, "playback: random pick");
    self.play(catalog, &id)
  }

  pub fn stop(&mut self) -> Result<Video> {
    match std::mem::take(&mut self.state) {
      PlaybackState::NoVideo => Err(Error::IllegalState(PlaybackFault::NoVideoPlaying)),
      PlaybackState::Playing(v) | PlaybackState::Paused(v) => {
        info!(video_id = %v.id, "playback: stopped");
        Ok(v)
      }
    }
  }

  pub fn pause(&mut self) -> Result<PauseReport> {
    match &self.state {
      PlaybackState::NoVideo => Err(Error::IllegalState(PlaybackFault::NoVideoPlaying)),
      PlaybackState::Paused(v) => Ok(PauseReport::AlreadyPaused(v.clone())),
      PlaybackState::Playing(v) => {
        let video = v.clone();
        info!(video_id = %video.id, "playback: paused");
        self.state = PlaybackState::Paused(video.clone());
        Ok(PauseReport::Paused(video))
      }
    }
  }

  /// Resume a paused video.
  pub fn resume(&mut self) -> Result<Video> {
    let PlaybackState::Paused(v) = &self.state else {
      return Err(Error::IllegalState(PlaybackFault::NotPaused));
    };
    let video = v.clone();
    info!(video_id = %video.id, "playback: continuing");
    self.state = PlaybackState::Playing(video.clone());
    Ok(video)
  }

  pub fn now_playing(&self) -> NowPlaying<'_> {
    match &self.state {
      PlaybackState::NoVideo => NowPlaying::Nothing,
      PlaybackState::Playing(v) => NowPlaying::Playing(v),
      PlaybackState::Paused(v) => NowPlaying::Paused(v),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::Library;
  use crate::catalog::tests::cats;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  fn playing(lib: &Library, id: &str) -> VideoPlayer {
    let mut player = VideoPlayer::new();
    player.play(lib, id).unwrap();
    player
  }

  // --- play ---

  #[test]
  fn play_from_idle_starts_video() {
    let lib = cats();
    let mut player = VideoPlayer::new();
    let report = player.play(&lib, "v1").unwrap();
    assert_eq!(report.stopped, None);
    assert_eq!(report.started.id, "v1");
    assert!(matches!(player.now_playing(), NowPlaying::Playing(v) if v.id == "v1"));
  }

  #[test]
  fn play_unknown_id_leaves_state_alone() {
    let lib = cats();
    let mut player = VideoPlayer::new();
    assert_eq!(player.play(&lib, "missing"), Err(Error::VideoNotFound("missing".into())));
    assert_eq!(player.state(), &PlaybackState::NoVideo);

    let mut player = playing(&lib, "v1");
    player.pause().unwrap();
    let before = player.state().clone();
    assert!(player.play(&lib, "missing").is_err());
    assert_eq!(player.state(), &before);
  }

  #[test]
  fn play_replaces_current_video() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    let report = player.play(&lib, "v2").unwrap();
    assert_eq!(report.stopped.map(|v| v.id), Some("v1".to_string()));
    assert_eq!(player.state().current().map(|v| v.id.as_str()), Some("v2"));
  }

  #[test]
  fn play_same_video_restarts_it() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    let report = player.play(&lib, "v1").unwrap();
    assert_eq!(report.stopped.map(|v| v.id), Some("v1".to_string()));
    assert_eq!(report.started.id, "v1");
  }

  #[test]
  fn play_clears_pause() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    player.pause().unwrap();
    player.play(&lib, "v2").unwrap();
    assert!(matches!(player.state(), PlaybackState::Playing(_)));
    assert_eq!(player.resume(), Err(Error::IllegalState(PlaybackFault::NotPaused)));
  }

  // --- play_random ---

  #[test]
  fn play_random_on_empty_catalog() {
    let lib = Library::default();
    let mut player = VideoPlayer::new();
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(player.play_random(&lib, &mut rng), Err(Error::EmptyCatalog));
    assert_eq!(player.state(), &PlaybackState::NoVideo);
  }

  #[test]
  fn play_random_picks_catalog_video() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
      let report = player.play_random(&lib, &mut rng).unwrap();
      assert!(lib.get_video(&report.started.id).is_some());
      assert!(report.stopped.is_some());
    }
  }

  // --- stop ---

  #[test]
  fn stop_when_idle_fails() {
    let mut player = VideoPlayer::new();
    assert_eq!(player.stop(), Err(Error::IllegalState(PlaybackFault::NoVideoPlaying)));
  }

  #[test]
  fn stop_then_continue_fails() {
    let lib = cats();
    let mut player = playing(&lib, "v2");
    player.pause().unwrap();
    assert_eq!(player.stop().unwrap().id, "v2");
    assert_eq!(player.state(), &PlaybackState::NoVideo);
    assert_eq!(player.resume(), Err(Error::IllegalState(PlaybackFault::NotPaused)));
  }

  // --- pause / resume ---

  #[test]
  fn pause_when_idle_fails() {
    let mut player = VideoPlayer::new();
    assert_eq!(player.pause(), Err(Error::IllegalState(PlaybackFault::NoVideoPlaying)));
  }

  #[test]
  fn pause_twice_reports_already_paused() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    assert!(matches!(player.pause(), Ok(PauseReport::Paused(v)) if v.id == "v1"));
    let state = player.state().clone();
    assert!(matches!(player.pause(), Ok(PauseReport::AlreadyPaused(v)) if v.id == "v1"));
    assert_eq!(player.state(), &state);
  }

  #[test]
  fn resume_requires_pause() {
    let lib = cats();
    let mut player = playing(&lib, "v1");
    assert_eq!(player.resume(), Err(Error::IllegalState(PlaybackFault::NotPaused)));
    player.pause().unwrap();
    assert_eq!(player.resume().unwrap().id, "v1");
    assert!(matches!(player.now_playing(), NowPlaying::Playing(_)));
    assert!(player.resume().is_err());
  }

  #[test]
  fn now_playing_reflects_pause() {
    let lib = cats();
    let mut player = VideoPlayer::new();
    assert_eq!(player.now_playing(), NowPlaying::Nothing);
    player.play(&lib, "v2").unwrap();
    player.pause().unwrap();
    assert!(matches!(player.now_playing(), NowPlaying::Paused(v) if v.title == "Another Cat Video"));
    assert!(player.is_playing());
  }
}

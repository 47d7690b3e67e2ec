use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::catalog::{Library, VideoCatalog};
use crate::display;
use crate::error::{Error, Result};
use crate::input::Command;
use crate::player::VideoPlayer;
use crate::playlist::PlaylistStore;
use crate::search::{self, SearchQuery};

/// Render a failed command, logging what it was about.
fn failed(action: &str, err: &Error) -> String {
  debug!(action, subject = ?err.subject(), err = %err, "command: failed");
  display::failure(action, err)
}

/// What the next input line is interpreted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
  Command,
  /// A search listed these video ids and is waiting for a pick.
  Selection(Vec<String>),
}

/// All session state: the catalog plus everything the commands mutate.
pub struct App {
  pub library: Library,
  pub player: VideoPlayer,
  pub playlists: PlaylistStore,
  pub mode: AppMode,
  pub should_quit: bool,
  rng: StdRng,
}

impl App {
  pub fn new(library: Library) -> Self {
    Self::with_rng(library, StdRng::from_os_rng())
  }

  pub fn with_rng(library: Library, rng: StdRng) -> Self {
    Self {
      library,
      player: VideoPlayer::new(),
      playlists: PlaylistStore::new(),
      mode: AppMode::Command,
      should_quit: false,
      rng,
    }
  }

  /// Feed one input line and return the lines to print.
  pub fn handle_line(&mut self, line: &str) -> Vec<String> {
    if let AppMode::Selection(matches) = std::mem::replace(&mut self.mode, AppMode::Command) {
      return match search::dispatch_selection(&matches, line, &mut self.player, &self.library) {
        Ok(Some(report)) => display::played(&report),
        Ok(None) => Vec::new(),
        Err(e) => vec![failed("play video", &e)],
      };
    }

    if line.trim().is_empty() {
      return Vec::new();
    }
    match line.parse::<Command>() {
      Ok(cmd) => self.execute(cmd),
      Err(e) => {
        debug!(err = %e, line = %line.trim(), "input: rejected");
        vec![display::INVALID_COMMAND.to_string()]
      }
    }
  }

  pub fn execute(&mut self, cmd: Command) -> Vec<String> {
    debug!(command = ?cmd, "input: executing");
    match cmd {
      Command::NumberOfVideos => vec![display::catalog_size(self.library.len())],
      Command::ShowAllVideos => display::all_videos(self.library.all_videos()),
      Command::Play(id) => match self.player.play(&self.library, &id) {
        Ok(report) => display::played(&report),
        Err(e) => vec![failed("play video", &e)],
      },
      Command::PlayRandom => match self.player.play_random(&self.library, &mut self.rng) {
        Ok(report) => display::played(&report),
        Err(e) => vec![failed("play video", &e)],
      },
      Command::Stop => vec![match self.player.stop() {
        Ok(video) => display::stopped_line(&video),
        Err(e) => failed("stop video", &e),
      }],
      Command::Pause => vec![match self.player.pause() {
        Ok(report) => display::paused(&report),
        Err(e) => failed("pause video", &e),
      }],
      Command::Continue => vec![match self.player.resume() {
        Ok(video) => display::continued(&video),
        Err(e) => failed("continue video", &e),
      }],
      Command::ShowPlaying => vec![display::now_playing(self.player.now_playing())],
      Command::CreatePlaylist(name) => vec![match self.playlists.create(&name) {
        Ok(()) => format!("Successfully created new playlist: {}", name),
        Err(e) => failed("create playlist", &e),
      }],
      Command::AddToPlaylist { playlist, video_id } => {
        vec![match self.playlists.add_video(&self.library, &playlist, &video_id) {
          Ok(video) => format!("Added video to {}: {}", playlist, video.title),
          Err(e) => failed(&format!("add video to {}", playlist), &e),
        }]
      }
      Command::RemoveFromPlaylist { playlist, video_id } => {
        vec![match self.playlists.remove_video(&self.library, &playlist, &video_id) {
          Ok(video) => format!("Removed video from {}: {}", playlist, video.title),
          Err(e) => failed(&format!("remove video from {}", playlist), &e),
        }]
      }
      Command::ClearPlaylist(name) => vec![match self.playlists.clear(&name) {
        Ok(()) => format!("Successfully removed all videos from {}", name),
        Err(e) => failed(&format!("clear playlist {}", name), &e),
      }],
      Command::DeletePlaylist(name) => vec![match self.playlists.delete(&name) {
        Ok(()) => format!("Deleted playlist: {}", name),
        Err(e) => failed(&format!("delete playlist {}", name), &e),
      }],
      Command::ShowPlaylist(name) => match self.playlists.show(&self.library, &name) {
        Ok(videos) => display::playlist(&name, &videos),
        Err(e) => vec![failed(&format!("show playlist {}", name), &e)],
      },
      Command::ShowAllPlaylists => display::playlist_names(&self.playlists.list()),
      Command::SearchVideos(term) => self.search(SearchQuery::Title(&term)),
      Command::SearchVideosWithTag(tag) => self.search(SearchQuery::Tag(&tag)),
      Command::FlagVideo { video_id, reason } => match self.flag_video(&video_id, &reason) {
        Ok(()) => Vec::new(),
        Err(e) => vec![failed("flag video", &e)],
      },
      Command::AllowVideo(video_id) => match self.allow_video(&video_id) {
        Ok(()) => Vec::new(),
        Err(e) => vec![failed("remove flag from video", &e)],
      },
      Command::Help => display::HELP.lines().map(str::to_string).collect(),
      Command::Exit => {
        info!(state = ?self.player.state(), "session: exit requested");
        self.should_quit = true;
        vec!["Video player is shutting down. Goodbye!".to_string()]
      }
    }
  }

  /// List matches and, when there are any, wait for a pick on the next line.
  fn search(&mut self, query: SearchQuery<'_>) -> Vec<String> {
    let matches = search::find_matches(&self.library, query);
    let lines = display::search_results(query.term(), &matches);
    if !matches.is_empty() {
      self.mode = AppMode::Selection(matches.iter().map(|v| v.id.clone()).collect());
    }
    lines
  }

  /// Flagging is not available; nothing about the video changes.
  pub fn flag_video(&mut self, video_id: &str, reason: &str) -> Result<()> {
    warn!(video_id = %video_id, reason = %reason, "moderation: flag requested but unsupported");
    Err(Error::NotImplemented("Flagging"))
  }

  pub fn allow_video(&mut self, video_id: &str) -> Result<()> {
    warn!(video_id = %video_id, "moderation: allow requested but unsupported");
    Err(Error::NotImplemented("Flagging"))
  }
}

use std::str::FromStr;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  NumberOfVideos,
  ShowAllVideos,
  Play(String),
  PlayRandom,
  Stop,
  Pause,
  Continue,
  ShowPlaying,
  CreatePlaylist(String),
  AddToPlaylist { playlist: String, video_id: String },
  RemoveFromPlaylist { playlist: String, video_id: String },
  ClearPlaylist(String),
  DeletePlaylist(String),
  ShowPlaylist(String),
  ShowAllPlaylists,
  SearchVideos(String),
  SearchVideosWithTag(String),
  FlagVideo { video_id: String, reason: String },
  AllowVideo(String),
  Help,
  Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
  #[error("empty command")]
  Empty,
  #[error("unknown command '{0}'")]
  Unknown(String),
  #[error("{command} expects <{argument}>")]
  MissingArgument { command: &'static str, argument: &'static str },
}

/// Positional arguments after the command word.
struct Args<'a> {
  command: &'static str,
  rest: Vec<&'a str>,
  pos: usize,
}

impl<'a> Args<'a> {
  fn next(&mut self, argument: &'static str) -> Result<String, CommandError> {
    let arg = *self.rest.get(self.pos).ok_or(CommandError::MissingArgument { command: self.command, argument })?;
    self.pos += 1;
    Ok(arg.to_string())
  }

  /// Everything left, joined by single spaces.
  fn remainder(&mut self) -> String {
    let joined = self.rest[self.pos.min(self.rest.len())..].join(" ");
    self.pos = self.rest.len();
    joined
  }

  fn remainder_required(&mut self, argument: &'static str) -> Result<String, CommandError> {
    let joined = self.remainder();
    if joined.is_empty() {
      return Err(CommandError::MissingArgument { command: self.command, argument });
    }
    Ok(joined)
  }
}

impl FromStr for Command {
  type Err = CommandError;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let mut words = line.split_whitespace();
    let word = words.next().ok_or(CommandError::Empty)?.to_uppercase();
    let rest: Vec<&str> = words.collect();
    let args = |command: &'static str| Args { command, rest: rest.clone(), pos: 0 };

    let cmd = match word.as_str() {
      "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
      "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
      "PLAY" => Command::Play(args("PLAY").next("video_id")?),
      "PLAY_RANDOM" => Command::PlayRandom,
      "STOP" => Command::Stop,
      "PAUSE" => Command::Pause,
      "CONTINUE" => Command::Continue,
      "SHOW_PLAYING" => Command::ShowPlaying,
      "CREATE_PLAYLIST" => Command::CreatePlaylist(args("CREATE_PLAYLIST").next("playlist_name")?),
      "ADD_TO_PLAYLIST" => {
        let mut a = args("ADD_TO_PLAYLIST");
        Command::AddToPlaylist { playlist: a.next("playlist_name")?, video_id: a.next("video_id")? }
      }
      "REMOVE_FROM_PLAYLIST" => {
        let mut a = args("REMOVE_FROM_PLAYLIST");
        Command::RemoveFromPlaylist { playlist: a.next("playlist_name")?, video_id: a.next("video_id")? }
      }
      "CLEAR_PLAYLIST" => Command::ClearPlaylist(args("CLEAR_PLAYLIST").next("playlist_name")?),
      "DELETE_PLAYLIST" => Command::DeletePlaylist(args("DELETE_PLAYLIST").next("playlist_name")?),
      "SHOW_PLAYLIST" => Command::ShowPlaylist(args("SHOW_PLAYLIST").next("playlist_name")?),
      "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
      "SEARCH_VIDEOS" => Command::SearchVideos(args("SEARCH_VIDEOS").remainder_required("search_term")?),
      "SEARCH_VIDEOS_WITH_TAG" => {
        Command::SearchVideosWithTag(args("SEARCH_VIDEOS_WITH_TAG").next("tag_name")?)
      }
      "FLAG_VIDEO" => {
        let mut a = args("FLAG_VIDEO");
        Command::FlagVideo { video_id: a.next("video_id")?, reason: a.remainder() }
      }
      "ALLOW_VIDEO" => Command::AllowVideo(args("ALLOW_VIDEO").next("video_id")?),
      "HELP" => Command::Help,
      "EXIT" => Command::Exit,
      _ => return Err(CommandError::Unknown(word)),
    };
    Ok(cmd)
  }
}

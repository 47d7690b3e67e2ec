//! Text rendering of command outcomes.

use crate::catalog::Video;
use crate::error::Error;
use crate::player::{NowPlaying, PauseReport, PlayReport};

pub const HELP: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, tags and paused status of the current video.
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

pub const INVALID_COMMAND: &str = "Please enter a valid command, type HELP for a list of available commands.";

/// `Title (id) [#tag1 #tag2]`
pub fn video_line(video: &Video) -> String {
  format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

pub fn failure(action: &str, err: &Error) -> String {
  format!("Cannot {}: {}", action, err)
}

pub fn catalog_size(count: usize) -> String {
  format!("{} videos in the library", count)
}

pub fn all_videos(videos: &[Video]) -> Vec<String> {
  std::iter::once("Here's a list of all available videos:".to_string())
    .chain(videos.iter().map(|v| format!("  {}", video_line(v))))
    .collect()
}

pub fn played(report: &PlayReport) -> Vec<String> {
  let mut lines = Vec::with_capacity(2);
  if let Some(ref stopped) = report.stopped {
    lines.push(stopped_line(stopped));
  }
  lines.push(format!("Playing video: {}", report.started.title));
  lines
}

pub fn stopped_line(video: &Video) -> String {
  format!("Stopping video: {}", video.title)
}

pub fn paused(report: &PauseReport) -> String {
  match report {
    PauseReport::Paused(v) => format!("Pausing video: {}", v.title),
    PauseReport::AlreadyPaused(v) => format!("Video already paused: {}", v.title),
  }
}

pub fn continued(video: &Video) -> String {
  format!("Continuing video: {}", video.title)
}

pub fn now_playing(status: NowPlaying<'_>) -> String {
  match status {
    NowPlaying::Nothing => "No video is currently playing".to_string(),
    NowPlaying::Playing(v) => format!("Currently playing: {}", video_line(v)),
    NowPlaying::Paused(v) => format!("Currently playing: {} - PAUSED", video_line(v)),
  }
}

pub fn playlist_names(names: &[&str]) -> Vec<String> {
  if names.is_empty() {
    return vec!["No playlists exist yet".to_string()];
  }
  std::iter::once("Showing all playlists:".to_string()).chain(names.iter().map(|n| format!("  {}", n))).collect()
}

pub fn playlist(name: &str, videos: &[&Video]) -> Vec<String> {
  let mut lines = vec![format!("Showing playlist: {}", name)];
  if videos.is_empty() {
    lines.push("  No videos here yet".to_string());
  } else {
    lines.extend(videos.iter().map(|v| format!("  {}", video_line(v))));
  }
  lines
}

/// Numbered results plus the selection prompt, or the no-results line.
pub fn search_results(term: &str, videos: &[&Video]) -> Vec<String> {
  if videos.is_empty() {
    return vec![format!("No search results for {}", term)];
  }
  let mut lines = vec![format!("Here are the results for {}:", term)];
  lines.extend(videos.iter().enumerate().map(|(i, v)| format!("  {}) {}", i + 1, video_line(v))));
  lines.push("Would you like to play any of the above? If yes, specify the number of the video.".to_string());
  lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
  lines
}

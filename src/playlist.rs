//! Named playlists.
//!
//! Playlist names are matched case-insensitively through [`PlaylistKey`],
//! while the casing used at creation is kept for display.

use std::collections::HashMap;
use std::fmt;
use tracing::info;

use crate::catalog::{Video, VideoCatalog};
use crate::error::{Error, Result};

/// Case-insensitive identity of a playlist name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistKey(String);

impl PlaylistKey {
  /// The only place playlist names are normalized: Unicode lower-casing.
  pub fn new(name: &str) -> Self {
    Self(name.to_lowercase())
  }
}

impl fmt::Display for PlaylistKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
  display_name: String,
  videos: Vec<String>,
}

impl Playlist {
  pub fn display_name(&self) -> &str {
    &self.display_name
  }

  /// Video ids in the order they were added.
  pub fn videos(&self) -> &[String] {
    &self.videos
  }

  pub fn contains(&self, id: &str) -> bool {
    self.videos.iter().any(|v| v == id)
  }
}

#[derive(Debug, Default)]
pub struct PlaylistStore {
  playlists: HashMap<PlaylistKey, Playlist>,
  /// Keys in creation order.
  order: Vec<PlaylistKey>,
}

impl PlaylistStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&Playlist> {
    self.playlists.get(&PlaylistKey::new(name))
  }

  fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
    self.playlists.get_mut(&PlaylistKey::new(name)).ok_or_else(|| Error::PlaylistNotFound(name.to_string()))
  }

  pub fn create(&mut self, name: &str) -> Result<()> {
    let key = PlaylistKey::new(name);
    if self.playlists.contains_key(&key) {
      return Err(Error::AlreadyExists(name.to_string()));
    }
    info!(playlist = %key, "playlist: created");
    self.playlists.insert(key.clone(), Playlist { display_name: name.to_string(), videos: Vec::new() });
    self.order.push(key);
    Ok(())
  }

  /// Append a catalog video to the end of a playlist.
  pub fn add_video<'c, C: VideoCatalog + ?Sized>(
    &mut self,
    catalog: &'c C,
    name: &str,
    id: &str,
  ) -> Result<&'c Video> {
    let playlist = self.get_mut(name)?;
    let video = catalog.get_video(id).ok_or_else(|| Error::VideoNotFound(id.to_string()))?;
    if playlist.contains(id) {
      return Err(Error::DuplicateVideo(id.to_string()));
    }
    playlist.videos.push(id.to_string());
    info!(playlist = %name, video_id = %id, len = playlist.videos.len(), "playlist: video added");
    Ok(video)
  }

  pub fn remove_video<'c, C: VideoCatalog + ?Sized>(
    &mut self,
    catalog: &'c C,
    name: &str,
    id: &str,
  ) -> Result<&'c Video> {
    let playlist = self.get_mut(name)?;
    let video = catalog.get_video(id).ok_or_else(|| Error::VideoNotFound(id.to_string()))?;
    let pos = playlist.videos.iter().position(|v| v == id).ok_or_else(|| Error::VideoNotInPlaylist(id.to_string()))?;
    playlist.videos.remove(pos);
    info!(playlist = %name, video_id = %id, "playlist: video removed");
    Ok(video)
  }

  pub fn clear(&mut self, name: &str) -> Result<()> {
    let playlist = self.get_mut(name)?;
    playlist.videos.clear();
    info!(playlist = %name, "playlist: cleared");
    Ok(())
  }

  pub fn delete(&mut self, name: &str) -> Result<()> {
    let key = PlaylistKey::new(name);
    if self.playlists.remove(&key).is_none() {
      return Err(Error::PlaylistNotFound(name.to_string()));
    }
    self.order.retain(|k| k != &key);
    info!(playlist = %key, "playlist: deleted");
    Ok(())
  }

  /// Display names in creation order.
  pub fn list(&self) -> Vec<&str> {
    self.order.iter().filter_map(|k| self.playlists.get(k)).map(Playlist::display_name).collect()
  }

  /// The videos of a playlist, in playlist order.
  pub fn show<'c, C: VideoCatalog + ?Sized>(&self, catalog: &'c C, name: &str) -> Result<Vec<&'c Video>> {
    let playlist = self.get(name).ok_or_else(|| Error::PlaylistNotFound(name.to_string()))?;
    Ok(playlist.videos().iter().filter_map(|id| catalog.get_video(id)).collect())
  }
}

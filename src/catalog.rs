use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
  pub id: String,
  pub title: String,
  /// Lower-case, de-duplicated, in the order they were listed.
  pub tags: Vec<String>,
}

impl Video {
  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.iter().any(|t| t == tag)
  }
}

/// Read-only access to the videos the platform knows about.
pub trait VideoCatalog {
  /// Every video, in catalog order.
  fn all_videos(&self) -> &[Video];

  fn get_video(&self, id: &str) -> Option<&Video>;
}

/// In-memory catalog, filled once at startup.
#[derive(Debug, Default)]
pub struct Library {
  videos: Vec<Video>,
  index: HashMap<String, usize>,
}

impl Library {
  /// Build a library from already-parsed videos. Ids must be unique.
  pub fn from_videos(videos: Vec<Video>) -> Result<Self> {
    let mut index = HashMap::with_capacity(videos.len());
    for (pos, video) in videos.iter().enumerate() {
      if index.insert(video.id.clone(), pos).is_some() {
        bail!("duplicate video id '{}' in catalog", video.id);
      }
    }
    Ok(Self { videos, index })
  }

  /// Parse the `title | id | #tag1, #tag2` line format.
  pub fn parse(content: &str) -> Result<Self> {
    let videos = content
      .lines()
      .enumerate()
      .map(|(n, l)| (n + 1, l.trim()))
      .filter(|(_, l)| !l.is_empty())
      .filter_map(|(n, l)| {
        let parsed = parse_catalog_line(l);
        if parsed.is_none() {
          warn!(line = n, "catalog: skipping malformed line");
        }
        parsed
      })
      .collect();
    Self::from_videos(videos)
  }

  pub fn load(path: &Path) -> Result<Self> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let library = Self::parse(&content).with_context(|| format!("Invalid catalog {}", path.display()))?;
    info!(path = %path.display(), videos = library.len(), "catalog: loaded");
    Ok(library)
  }

  pub fn len(&self) -> usize {
    self.videos.len()
  }

  pub fn is_empty(&self) -> bool {
    self.videos.is_empty()
  }
}

impl VideoCatalog for Library {
  fn all_videos(&self) -> &[Video] {
    &self.videos
  }

  fn get_video(&self, id: &str) -> Option<&Video> {
    self.index.get(id).map(|&pos| &self.videos[pos])
  }
}

/// Split a comma-separated tag field into normalized tags.
fn parse_tags(raw: &str) -> Vec<String> {
  let mut tags: Vec<String> = Vec::new();
  for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
    let tag = tag.to_lowercase();
    if !tags.contains(&tag) {
      tags.push(tag);
    }
  }
  tags
}

/// Parse a single catalog line into a Video.
/// Expected format: `title | id [| tags]`
fn parse_catalog_line(line: &str) -> Option<Video> {
  let parts: Vec<&str> = line.split('|').collect();
  if parts.len() < 2 {
    return None;
  }
  let title = parts[0].trim().to_string();
  let id = parts[1].trim().to_string();
  if id.is_empty() {
    return None;
  }
  let tags = parts.get(2).map(|s| parse_tags(s)).unwrap_or_default();
  Some(Video { id, title, tags })
}

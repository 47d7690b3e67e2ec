use tracing::debug;

use crate::catalog::{Video, VideoCatalog};
use crate::error::Result;
use crate::player::{PlayReport, VideoPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQuery<'a> {
  /// Case-insensitive substring of the title.
  Title(&'a str),
  /// Exact tag, compared lower-cased.
  Tag(&'a str),
}

impl SearchQuery<'_> {
  pub fn term(&self) -> &str {
    match self {
      SearchQuery::Title(t) | SearchQuery::Tag(t) => t,
    }
  }
}

/// Every catalog video matching `query`, in catalog order.
pub fn find_matches<'c, C: VideoCatalog + ?Sized>(catalog: &'c C, query: SearchQuery<'_>) -> Vec<&'c Video> {
  let needle = query.term().to_lowercase();
  let matches: Vec<&Video> = match query {
    SearchQuery::Title(_) => catalog.all_videos().iter().filter(|v| v.title.to_lowercase().contains(&needle)).collect(),
    SearchQuery::Tag(_) => catalog.all_videos().iter().filter(|v| v.has_tag(&needle)).collect(),
  };
  debug!(query = ?query, results = matches.len(), "search: matched");
  matches
}

/// Interpret an answer to the "play one of these?" prompt.
///
/// Returns the 0-based index for an integer in `1..=count`; anything else
/// means no selection.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
  match input.trim().parse::<usize>() {
    Ok(n) if (1..=count).contains(&n) => Some(n - 1),
    _ => None,
  }
}

/// Play the match the user picked, if the answer picks one.
pub fn dispatch_selection<C: VideoCatalog + ?Sized>(
  matches: &[String],
  input: &str,
  player: &mut VideoPlayer,
  catalog: &C,
) -> Result<Option<PlayReport>> {
  let Some(idx) = parse_selection(input, matches.len()) else {
    debug!(input = %input.trim(), "search: no selection");
    return Ok(None);
  };
  player.play(catalog, &matches[idx]).map(Some)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::tests::{cats, video};
  use crate::catalog::Library;
  use crate::player::PlaybackState;

  fn ids(videos: Vec<&Video>) -> Vec<String> {
    videos.into_iter().map(|v| v.id.clone()).collect()
  }

  // --- find_matches ---

  #[test]
  fn tag_search_keeps_catalog_order() {
    let lib = cats();
    assert_eq!(ids(find_matches(&lib, SearchQuery::Tag("#cat"))), vec!["v1", "v2"]);
    assert_eq!(ids(find_matches(&lib, SearchQuery::Tag("#ANIMAL"))), vec!["v2"]);
  }

  #[test]
  fn tag_search_is_exact() {
    let lib = cats();
    assert!(find_matches(&lib, SearchQuery::Tag("#ca")).is_empty());
    assert!(find_matches(&lib, SearchQuery::Tag("cat")).is_empty());
  }

  #[test]
  fn title_search_is_case_insensitive_substring() {
    let lib = Library::from_videos(vec![
      video("z", "Zebra cats", &[]),
      video("a", "Funny Dogs", &[]),
      video("c", "CATalogue", &[]),
    ])
    .unwrap();
    assert_eq!(ids(find_matches(&lib, SearchQuery::Title("cat"))), vec!["z", "c"]);
    assert!(find_matches(&lib, SearchQuery::Title("horse")).is_empty());
  }

  // --- parse_selection ---

  #[test]
  fn selection_in_range() {
    assert_eq!(parse_selection("1", 2), Some(0));
    assert_eq!(parse_selection(" 2 ", 2), Some(1));
  }

  #[test]
  fn selection_out_of_range_or_garbage() {
    assert_eq!(parse_selection("0", 2), None);
    assert_eq!(parse_selection("3", 2), None);
    assert_eq!(parse_selection("-1", 2), None);
    assert_eq!(parse_selection("abc", 2), None);
    assert_eq!(parse_selection("", 2), None);
  }

  // --- dispatch_selection ---

  #[test]
  fn selecting_a_match_plays_it() {
    let lib = cats();
    let mut player = VideoPlayer::new();
    let matches = ids(find_matches(&lib, SearchQuery::Tag("#cat")));
    let report = dispatch_selection(&matches, "2", &mut player, &lib).unwrap().unwrap();
    assert_eq!(report.started.id, "v2");
  }

  #[test]
  fn invalid_selection_plays_nothing() {
    let lib = cats();
    let mut player = VideoPlayer::new();
    let matches = ids(find_matches(&lib, SearchQuery::Tag("#cat")));
    for answer in ["9", "abc"] {
      assert_eq!(dispatch_selection(&matches, answer, &mut player, &lib), Ok(None));
      assert_eq!(player.state(), &PlaybackState::NoVideo);
    }
  }
}

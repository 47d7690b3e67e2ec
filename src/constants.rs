//! Built-in names and defaults: directory and log file names, the prompt,
//! the fallback log filter, and the catalog shipped with the binary.
//!
//! `constants.ron` and `videos.txt` are compiled into the executable.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  /// Name used for the config/data directories.
  pub app_name: String,
  pub prompt: String,

  // Logging
  pub log_file_name: String,
  pub default_log_filter: String,

  pub config_file_name: String,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Checked by `embedded_constants_parse`.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}

/// The catalog shipped with the binary, in the `title | id | tags` line format.
pub const DEFAULT_CATALOG: &str = include_str!("../videos.txt");

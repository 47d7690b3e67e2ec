use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::constants;

#[derive(Deserialize, Default, Debug, PartialEq)]
pub struct Config {
  /// Catalog file replacing the embedded one.
  pub catalog_path: Option<PathBuf>,
  pub log_filter: Option<String>,
}

/// A config file that exists but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("malformed config {}: {source}", .path.display())]
pub struct ConfigError {
  pub path: PathBuf,
  #[source]
  pub source: toml::de::Error,
}

impl Config {
  /// Read `prefs.toml` from the platform config dir. A missing file yields
  /// the defaults; a malformed one is returned as an error for the caller to
  /// report once logging is up.
  pub fn load() -> Result<Self, ConfigError> {
    match config_file() {
      Some(path) => Self::load_from(&path),
      None => Ok(Self::default()),
    }
  }

  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    match std::fs::read_to_string(path) {
      Ok(content) => Self::parse(&content).map_err(|source| ConfigError { path: path.to_path_buf(), source }),
      Err(_) => Ok(Self::default()),
    }
  }

  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }
}

fn config_file() -> Option<PathBuf> {
  ProjectDirs::from("", "", &constants().app_name).map(|dirs| dirs.config_dir().join(&constants().config_file_name))
}

/// Directory the log file is written to, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
  ProjectDirs::from("", "", &constants().app_name).map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vp-config-{}-{}.toml", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
  }

  // --- parse ---

  #[test]
  fn parse_full_config() {
    let config = Config::parse("catalog_path = \"/tmp/videos.txt\"\nlog_filter = \"debug\"\n").unwrap();
    assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/videos.txt")));
    assert_eq!(config.log_filter.as_deref(), Some("debug"));
  }

  #[test]
  fn parse_empty_config_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
  }

  #[test]
  fn parse_rejects_wrong_types() {
    assert!(Config::parse("log_filter = 3").is_err());
  }

  // --- load_from ---

  #[test]
  fn load_missing_file_is_default() {
    let path = std::env::temp_dir().join("vp-config-does-not-exist.toml");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
  }

  #[test]
  fn load_malformed_file_returns_error_with_path() {
    let path = scratch_file("malformed", "log_filter = 3\n");
    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(err.path, path);
    assert!(err.to_string().starts_with("malformed config "));
    std::fs::remove_file(&path).unwrap();
  }

  #[test]
  fn load_valid_file() {
    let path = scratch_file("valid", "log_filter = \"trace\"\n");
    assert_eq!(Config::load_from(&path).unwrap().log_filter.as_deref(), Some("trace"));
    std::fs::remove_file(&path).unwrap();
  }
}

mod app;
mod catalog;
mod config;
mod constants;
mod display;
mod error;
mod input;
mod player;
mod playlist;
mod search;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use app::App;
use catalog::Library;
use config::Config;
use constants::{DEFAULT_CATALOG, constants};

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Catalog file (`title | id | #tag, #tag` per line) to use instead of the built-in one
  #[arg(short, long)]
  catalog: Option<PathBuf>,

  /// Log filter directive, e.g. `debug` or `vp=trace` (RUST_LOG takes precedence)
  #[arg(long)]
  log_filter: Option<String>,

  /// Print a shell completion script and exit
  #[arg(long, value_name = "SHELL")]
  completions: Option<Shell>,
}

/// Startup choices after merging flags, config file and built-in constants.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
  /// `None` means the embedded catalog.
  catalog: Option<PathBuf>,
  log_filter: String,
}

/// Flags win over the config file, which wins over the built-in constants.
fn resolve(args: &Args, config: &Config) -> Settings {
  Settings {
    catalog: args.catalog.clone().or_else(|| config.catalog_path.clone()),
    log_filter: args
      .log_filter
      .clone()
      .or_else(|| config.log_filter.clone())
      .unwrap_or_else(|| constants().default_log_filter.clone()),
  }
}

// --- Logging ---

/// Log to a file in the data directory so stdout only carries the session.
/// Logging is optional: any setup failure leaves it off and the session runs on.
fn init_logging(filter: &str) -> Option<WorkerGuard> {
  init_logging_in(&config::log_dir()?, filter)
}

fn init_logging_in(log_dir: &Path, filter: &str) -> Option<WorkerGuard> {
  if let Err(e) = std::fs::create_dir_all(log_dir) {
    eprintln!("Logging disabled: cannot create {}: {}", log_dir.display(), e);
    return None;
  }
  let env_filter = match EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(filter)) {
    Ok(f) => f,
    Err(e) => {
      eprintln!("Logging disabled: invalid log filter '{}': {}", filter, e);
      return None;
    }
  };

  let file_appender = tracing_appender::rolling::never(log_dir, &constants().log_file_name);
  let (writer, guard) = tracing_appender::non_blocking(file_appender);
  tracing_subscriber::fmt().with_writer(writer).with_ansi(false).with_target(true).with_env_filter(env_filter).init();
  Some(guard)
}

fn load_library(catalog: Option<&Path>) -> Result<Library> {
  match catalog {
    Some(path) => Library::load(path),
    None => Library::parse(DEFAULT_CATALOG).context("Built-in catalog is invalid"),
  }
}

// --- Main ---

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(shell) = args.completions {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    return Ok(());
  }

  let (config, config_err) = match Config::load() {
    Ok(config) => (config, None),
    Err(e) => (Config::default(), Some(e)),
  };
  let settings = resolve(&args, &config);
  let _log_guard = init_logging(&settings.log_filter);
  if let Some(e) = config_err {
    warn!(path = %e.path.display(), err = %e.source, "config: malformed, using defaults");
  }

  let library = load_library(settings.catalog.as_deref())?;
  if library.is_empty() {
    warn!("session: catalog has no videos");
  }
  info!(videos = library.len(), "session: starting");

  run(App::new(library)).await
}

async fn run(mut app: App) -> Result<()> {
  println!("Hello and welcome to the video player! Type HELP for a list of available commands.");
  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  loop {
    print!("{}", constants().prompt);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
      info!("session: stdin closed");
      break;
    };

    for out in app.handle_line(&line) {
      println!("{}", out);
    }

    if app.should_quit {
      break;
    }
  }
  info!(playing = app.player.is_playing(), "session: ended");
  Ok(())
}

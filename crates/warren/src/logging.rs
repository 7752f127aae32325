//! File logging. The terminal belongs to the TUI, so nothing is written there.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WARREN_LOG";
const LOG_FILE: &str = "warren.log";

/// Default log location in the platform cache directory.
pub fn default_log_path() -> color_eyre::Result<PathBuf> {
    ProjectDirs::from("", "", "warren")
        .map(|dirs| dirs.cache_dir().join(LOG_FILE))
        .ok_or_else(|| eyre!("no home directory to place the log file in"))
}

/// Install the global subscriber, appending to `path` or the default log
/// file. The level comes from `WARREN_LOG`, defaulting to `info`.
pub fn init(path: Option<&Path>) -> color_eyre::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(path)
}

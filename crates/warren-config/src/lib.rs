//! Configuration for the warren scene player.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/warren/` on Linux). A missing file means defaults; a file that
//! fails to parse is an error.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use warren_core::{
    CoreError, DEFAULT_FONT_SIZE, Direction, Presentation, SceneKind, StyleOverrides, parse_color,
};

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or writing the config file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no home directory to place the config in")]
    NoConfigDir,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// User settings. Every field has a default, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which scene to play.
    pub scene: SceneKind,
    /// Milliseconds between foreground frames.
    pub cycler_frame_rate_ms: u64,
    /// Milliseconds between background frames.
    pub scroll_frame_rate_ms: u64,
    /// Seconds for one full background scroll loop.
    pub scroll_duration_secs: u64,
    /// Background scroll direction.
    pub direction: Direction,
    /// Text color for both layers.
    pub color: String,
    /// Accepted for compatibility; terminals choose their own glyph size.
    pub font_size: u16,
    /// Show the status line at the bottom of the screen.
    pub show_status: bool,
    /// JSON frame files replacing the built-in foreground sets, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frame_sets: Vec<PathBuf>,
    /// JSON frame file replacing the built-in background frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_frames: Option<PathBuf>,
    /// Overrides merged onto the base presentation.
    pub style: StyleOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            cycler_frame_rate_ms: 200,
            scroll_frame_rate_ms: 150,
            scroll_duration_secs: 20,
            direction: Direction::default(),
            color: "#4a4a4a".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            show_status: true,
            frame_sets: Vec::new(),
            scroll_frames: None,
            style: StyleOverrides::default(),
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "warren")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, self.to_toml()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn cycler_frame_rate(&self) -> Duration {
        Duration::from_millis(self.cycler_frame_rate_ms)
    }

    pub fn scroll_frame_rate(&self) -> Duration {
        Duration::from_millis(self.scroll_frame_rate_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_secs(self.scroll_duration_secs)
    }

    /// The presentation described by `color`, `font_size` and `style`.
    pub fn presentation(&self) -> Result<Presentation, ConfigError> {
        if self.font_size != DEFAULT_FONT_SIZE {
            tracing::debug!(
                font_size = self.font_size,
                "font size is set by the terminal; ignoring"
            );
        }
        let presentation = Presentation {
            font_size: self.font_size,
            ..Presentation::with_color(parse_color(&self.color)?)
        };
        Ok(presentation.merge(&self.style)?)
    }
}

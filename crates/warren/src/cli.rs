use std::path::PathBuf;

use clap::Parser;
use warren_config::Config;
use warren_core::{Direction, SceneKind};

/// A looping ASCII bunny over a scrolling forest.
#[derive(Parser, Debug)]
#[command(name = "warren", version, about)]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scene to play: scroller or zoom.
    #[arg(long)]
    pub scene: Option<SceneKind>,

    /// Background scroll direction: forward or reverse.
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Milliseconds between foreground frames.
    #[arg(long, value_name = "MS")]
    pub frame_rate: Option<u64>,

    /// Milliseconds between background frames.
    #[arg(long, value_name = "MS")]
    pub scroll_rate: Option<u64>,

    /// Seconds for one full background scroll loop.
    #[arg(long, value_name = "SECS")]
    pub scroll_duration: Option<u64>,

    /// Text color: a name, `#rrggbb` or a palette index.
    #[arg(long)]
    pub color: Option<String>,

    /// JSON frame files to play in the foreground, in order.
    #[arg(long = "frames", value_name = "JSON", num_args = 1..)]
    pub frames: Vec<PathBuf>,

    /// JSON frame file to scroll in the background.
    #[arg(long, value_name = "JSON")]
    pub scroll_frames: Option<PathBuf>,

    /// Log file path. Defaults to warren.log in the cache directory.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(ms) = self.frame_rate {
            config.cycler_frame_rate_ms = ms;
        }
        if let Some(ms) = self.scroll_rate {
            config.scroll_frame_rate_ms = ms;
        }
        if let Some(secs) = self.scroll_duration {
            config.scroll_duration_secs = secs;
        }
        if let Some(color) = &self.color {
            config.color = color.clone();
        }
        if !self.frames.is_empty() {
            config.frame_sets = self.frames.clone();
        }
        if let Some(path) = &self.scroll_frames {
            config.scroll_frames = Some(path.clone());
        }
    }
}

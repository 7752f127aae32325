//! Small option enums shared by the config, engine and app.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Scroll direction of a background layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content travels toward the left edge.
    #[default]
    Forward,
    /// Content travels toward the right edge.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Lowercase name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            _ => Err(CoreError::InvalidOption {
                kind: "direction",
                value: s.to_string(),
                expected: "forward, reverse",
            }),
        }
    }
}

/// Which scene the app plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Bunny hopping over a scrolling forest.
    #[default]
    Scroller,
    /// A single tree cycling through far, medium and close sizes.
    Zoom,
}

impl SceneKind {
    /// Lowercase name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            SceneKind::Scroller => "scroller",
            SceneKind::Zoom => "zoom",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scroller" => Ok(SceneKind::Scroller),
            "zoom" => Ok(SceneKind::Zoom),
            _ => Err(CoreError::InvalidOption {
                kind: "scene",
                value: s.to_string(),
                expected: "scroller, zoom",
            }),
        }
    }
}

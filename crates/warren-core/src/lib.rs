//! Core types for the warren scene player.
//!
//! Frames are opaque blocks of pre-rendered monospace text. They are grouped
//! into ordered [`FrameSet`]s which the engine plays back.

mod error;
mod frame;
mod options;
mod presentation;

pub use error::CoreError;
pub use frame::{Frame, FrameSet};
pub use options::{Direction, SceneKind};
pub use presentation::{DEFAULT_COLOR, DEFAULT_FONT_SIZE, Presentation, StyleOverrides, parse_color};

//! Frame cycling and scrolling layers for the warren scene player.
//!
//! This crate provides the two animated components of a scene and the
//! machinery that drives them:
//!
//! - [`FrameCycler`] steps through an ordered list of frame sets, moving to
//!   the next set whenever the active one is exhausted.
//! - [`ScrollLayer`] steps through a flat list of frames while its horizontal
//!   position follows a registered [`ScrollProfile`] over time.
//! - [`Scheduler`] runs both on fixed-period timers and hands back a
//!   [`TaskHandle`] that cancels on drop.
//! - [`KeyframeRegistry`] holds the scroll profiles, registered once per
//!   process.

mod cycler;
mod error;
mod keyframes;
mod loader;
pub mod render;
mod scheduler;
mod scroll;

pub use cycler::{AnimationState, CyclerOptions, DEFAULT_CYCLER_FRAME_RATE, FrameCycler};
pub use error::{EngineError, EngineResult};
pub use keyframes::{KeyframeRegistry, SCROLL_SHEET_ID, ScrollProfile, ScrollSheet};
pub use loader::{load_frame_set, load_frame_sets, parse_frame_set};
pub use scheduler::{Scheduler, TaskHandle, TaskId, TickCounter};
pub use scroll::{
    DEFAULT_SCROLL_DURATION, DEFAULT_SCROLL_FRAME_RATE, ScrollLayer, ScrollOptions, TILE_GAP,
};

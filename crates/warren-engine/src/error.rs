//! Engine errors.

use std::path::PathBuf;

use warren_core::CoreError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while mounting components or loading frame data.
///
/// Playback itself never fails; bad input is rejected before the first tick.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("no frame sets to play")]
    NoFrameSets,

    #[error("{what} must be greater than zero")]
    NonPositiveDuration { what: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to read frames from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid frame data in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

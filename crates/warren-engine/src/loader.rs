//! Loading precomputed frames from JSON.
//!
//! A frame file is a JSON array of strings, one string per frame, in
//! playback order. The text is taken as-is.

use std::{fs, path::Path};

use warren_core::FrameSet;

use crate::{EngineError, EngineResult};

/// Parse a JSON array of frame strings.
pub fn parse_frame_set(json: &str, label: Option<&str>, origin: &str) -> EngineResult<FrameSet> {
    let frames: Vec<String> =
        serde_json::from_str(json).map_err(|source| EngineError::Json {
            origin: origin.to_string(),
            source,
        })?;
    let set = match label {
        Some(label) => FrameSet::labelled(label, frames)?,
        None => FrameSet::new(frames)?,
    };
    Ok(set)
}

/// Load a frame file, labelling the set with the file stem.
pub fn load_frame_set(path: &Path) -> EngineResult<FrameSet> {
    let json = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path.file_stem().and_then(|s| s.to_str());
    let set = parse_frame_set(&json, label, &path.display().to_string())?;
    tracing::info!(path = %path.display(), frames = set.len(), "loaded frame set");
    Ok(set)
}

/// Load several frame files in order.
pub fn load_frame_sets<P: AsRef<Path>>(paths: &[P]) -> EngineResult<Vec<FrameSet>> {
    paths.iter().map(|p| load_frame_set(p.as_ref())).collect()
}

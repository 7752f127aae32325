//! Frames and ordered frame sets.

use std::{fmt, sync::Arc};

use crate::CoreError;

/// One pre-rendered block of monospace text.
///
/// The engine never looks inside a frame beyond splitting it into lines for
/// display. Cloning is cheap; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame(Arc<str>);

impl Frame {
    /// Wrap pre-rendered text as a frame.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// The raw frame text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the frame's rows.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }

    /// Width of the widest row, in characters.
    pub fn width(&self) -> usize {
        self.lines().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.lines().count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Frame {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// An ordered, non-empty sequence of frames.
///
/// Insertion order is playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    label: Option<String>,
    frames: Vec<Frame>,
}

impl FrameSet {
    /// Build a set from frames in playback order.
    pub fn new<I, F>(frames: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        Self::build(None, frames)
    }

    /// Build a labelled set, e.g. `"far"` or `"close"` for zoom levels.
    pub fn labelled<I, F>(label: impl Into<String>, frames: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        Self::build(Some(label.into()), frames)
    }

    fn build<I, F>(label: Option<String>, frames: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        let frames: Vec<Frame> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(CoreError::EmptyFrameSet { label });
        }
        Ok(Self { label, frames })
    }

    /// Optional display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of frames. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Width of the widest frame.
    pub fn width(&self) -> usize {
        self.frames.iter().map(Frame::width).max().unwrap_or(0)
    }

    /// Height of the tallest frame.
    pub fn height(&self) -> usize {
        self.frames.iter().map(Frame::height).max().unwrap_or(0)
    }
}

impl std::ops::Index<usize> for FrameSet {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.frames[index]
    }
}

//! Errors raised while building core values.

/// Errors raised while building frames, sets and presentations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A frame set was built without any frames.
    #[error("frame set{} has no frames", label_suffix(.label))]
    EmptyFrameSet { label: Option<String> },

    /// A color string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// An option value was not one of the accepted words.
    #[error("invalid {kind}: {value:?} (expected one of: {expected})")]
    InvalidOption {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

fn label_suffix(label: &Option<String>) -> String {
    label
        .as_deref()
        .map(|l| format!(" {l:?}"))
        .unwrap_or_default()
}

//! Layer presentation: text color plus optional style overrides.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Default text color for both layers, a dark gray.
pub const DEFAULT_COLOR: Color = Color::Rgb(0x4a, 0x4a, 0x4a);

/// Default font size, in points.
pub const DEFAULT_FONT_SIZE: u16 = 12;

/// Parse a color name (`"dark gray"`), hex triplet (`"#4a4a4a"`) or palette
/// index (`"240"`).
pub fn parse_color(s: &str) -> Result<Color, CoreError> {
    s.trim()
        .parse::<Color>()
        .map_err(|_| CoreError::InvalidColor(s.to_string()))
}

/// Style fields that may be layered on top of the base presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// How a layer's text is drawn.
///
/// A layer always covers the full frame area and never takes input; blank
/// cells in a frame leave whatever is underneath untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color: Color,
    /// Kept for config compatibility. The terminal decides glyph size.
    pub font_size: u16,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub background: Option<Color>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            dim: false,
            italic: false,
            background: None,
        }
    }
}

impl Presentation {
    /// Base presentation with the given text color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Merge overrides onto this presentation. Unset fields keep their value.
    pub fn merge(mut self, overrides: &StyleOverrides) -> Result<Self, CoreError> {
        if let Some(bold) = overrides.bold {
            self.bold = bold;
        }
        if let Some(dim) = overrides.dim {
            self.dim = dim;
        }
        if let Some(italic) = overrides.italic {
            self.italic = italic;
        }
        if let Some(bg) = overrides.background.as_deref() {
            self.background = Some(parse_color(bg)?);
        }
        Ok(self)
    }

    /// The ratatui style for non-blank cells.
    pub fn style(&self) -> Style {
        let mut style = Style::new().fg(self.color);
        if let Some(bg) = self.background {
            style = style.bg(bg);
        }
        let mut modifiers = Modifier::empty();
        if self.bold {
            modifiers |= Modifier::BOLD;
        }
        if self.dim {
            modifiers |= Modifier::DIM;
        }
        if self.italic {
            modifiers |= Modifier::ITALIC;
        }
        style.add_modifier(modifiers)
    }
}

//! Run-wide annotation settings.

use crate::model::BorderStyle;

/// Settings shared by every page and document of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotateOptions {
    /// Border drawn around each link
    pub border: BorderStyle,

    /// Padding added around each word box, in PDF units
    pub padding: f32,
}

impl AnnotateOptions {
    /// Create options with defaults (visible border, padding 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a visible or invisible border.
    pub fn with_border(mut self, visible: bool) -> Self {
        self.border = BorderStyle::bordered(visible);
        self
    }

    /// Make links invisible.
    pub fn without_border(self) -> Self {
        self.with_border(false)
    }

    /// Set the padding around each word box.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            border: BorderStyle::VISIBLE,
            padding: 1.0,
        }
    }
}

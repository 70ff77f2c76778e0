//! Per-page text layout as reported by the extraction tool.

use serde::{Deserialize, Serialize};

/// One word token on a page, in text-layer units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordGeometry {
    /// Raw word text, before normalization
    pub text: String,

    /// Left edge
    pub x_min: f32,

    /// Right edge
    pub x_max: f32,

    /// Top edge (distance from the top of the page)
    pub y_min: f32,

    /// Bottom edge (distance from the top of the page)
    pub y_max: f32,
}

impl WordGeometry {
    /// Create a word from its text and bounding box.
    pub fn new(text: impl Into<String>, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            text: text.into(),
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// The words found on a single page, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page height in text-layer units
    pub height: f32,

    /// Word tokens; not guaranteed to be in reading order
    pub words: Vec<WordGeometry>,
}

impl PageLayout {
    /// Create an empty layout for a page of the given height.
    pub fn new(height: f32) -> Self {
        Self {
            height,
            words: Vec::new(),
        }
    }

    /// Append a word.
    pub fn push(&mut self, word: WordGeometry) {
        self.words.push(word);
    }

    /// Builder-style variant of [`PageLayout::push`].
    pub fn with_word(mut self, word: WordGeometry) -> Self {
        self.words.push(word);
        self
    }

    /// Number of words on the page.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check if the page has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

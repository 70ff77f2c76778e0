//! Text-layer to annotation-space conversion.

use crate::model::{Rect, WordGeometry};

/// Map a word box onto a PDF annotation rectangle.
///
/// Both y edges are reflected through `page_height`, so the word's upper
/// edge lands in `bottom` and its lower edge in `top`; viewers accept the
/// swapped pair. The box grows by `padding` horizontally and below the
/// word, and by `2 * padding` above it. Inverted or empty word boxes are
/// passed through unchanged.
pub fn to_annotation_rect(word: &WordGeometry, page_height: f32, padding: f32) -> Rect {
    Rect {
        left: word.x_min - padding,
        bottom: page_height - word.y_min + 2.0 * padding,
        right: word.x_max + padding,
        top: page_height - word.y_max - padding,
    }
}

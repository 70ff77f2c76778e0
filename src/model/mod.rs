//! Data types shared by the extraction, matching and writing stages.
//!
//! Text-layer geometry ([`WordGeometry`], [`PageLayout`]) uses a top-left
//! origin with y growing downward. Annotation geometry ([`Rect`]) uses the
//! PDF convention: bottom-left origin, y growing upward.

mod annotation;
mod layout;

pub use annotation::{AnnotationRequest, BorderStyle, Rect};
pub use layout::{PageLayout, WordGeometry};

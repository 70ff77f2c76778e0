//! Word matching and link placement.

mod geometry;
mod options;
mod page;

pub use geometry::to_annotation_rect;
pub use options::AnnotateOptions;
pub use page::PageAnnotator;

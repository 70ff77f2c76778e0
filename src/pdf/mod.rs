//! PDF reading and writing on top of lopdf.
//!
//! [`SourceDocument`] enumerates the pages of an input file;
//! [`OutputDocument`] accumulates copies of those pages, takes link
//! annotations and is written out exactly once.

mod output;
mod source;

pub use output::OutputDocument;
pub use source::SourceDocument;

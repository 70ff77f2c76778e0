//! Text-layout extraction.
//!
//! The Document Processor only needs "give me the words and their boxes on
//! page N". [`LayoutExtractor`] is that seam; [`Pdftotext`] fills it with
//! the poppler `pdftotext -bbox` tool, and tests plug in closures.

mod bbox;
mod pdftotext;

pub use bbox::parse_bbox_layout;
pub use pdftotext::Pdftotext;

use std::path::Path;

use crate::error::ExtractError;
use crate::model::PageLayout;

/// Produces the word layout of one page of a document.
pub trait LayoutExtractor {
    /// Extract page `page_number` (1-based) of `document`.
    fn extract(&self, document: &Path, page_number: u32) -> Result<PageLayout, ExtractError>;
}

impl<F> LayoutExtractor for F
where
    F: Fn(&Path, u32) -> Result<PageLayout, ExtractError>,
{
    fn extract(&self, document: &Path, page_number: u32) -> Result<PageLayout, ExtractError> {
        self(document, page_number)
    }
}

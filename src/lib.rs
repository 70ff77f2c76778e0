//! # autolink
//!
//! Turn words in PDF documents into clickable links.
//!
//! A YAML dictionary maps words to URLs. For every page, the word layout is
//! extracted with `pdftotext -bbox`, each word is looked up in the
//! dictionary, and a link annotation is placed over every match. Input files
//! are never modified; annotated copies are written next to them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use autolink::{Annotator, UrlDictionary};
//!
//! fn main() -> autolink::Result<()> {
//!     let dictionary = UrlDictionary::load("links.yaml")?;
//!
//!     // Writes paper_annotated.pdf next to paper.pdf
//!     for report in Annotator::new(dictionary).annotate_path("paper.pdf")? {
//!         println!("{}: {} links", report.output.display(), report.link_count());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`normalize`]: lookup keys for dictionary words and page words
//! - [`dictionary`]: the word-to-URL mapping
//! - [`extract`]: per-page word boxes from an external tool
//! - [`annotate`]: coordinate mapping and per-page matching
//! - [`pdf`]: page copying and link writing
//! - [`process`]: the per-document loop
//! - [`batch`]: single-file and directory planning

pub mod annotate;
pub mod batch;
pub mod detect;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod pdf;
pub mod process;

// Re-export commonly used types
pub use annotate::{to_annotation_rect, AnnotateOptions, PageAnnotator};
pub use batch::{plan, BatchPlan, Job};
pub use dictionary::UrlDictionary;
pub use error::{Error, ExtractError, PageExtractionError, Result};
pub use extract::{parse_bbox_layout, LayoutExtractor, Pdftotext};
pub use model::{AnnotationRequest, BorderStyle, PageLayout, Rect, WordGeometry};
pub use normalize::{normalize_key, normalize_word};
pub use pdf::{OutputDocument, SourceDocument};
pub use process::{Annotator, ProcessReport};

use std::path::Path;

/// Load a dictionary from a YAML file.
///
/// # Example
///
/// ```no_run
/// let dictionary = autolink::load_dictionary("links.yaml").unwrap();
/// println!("{} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<UrlDictionary> {
    UrlDictionary::load(path)
}

/// Annotate a file or directory using `pdftotext` and default options.
///
/// # Arguments
///
/// * `input` - A `.pdf` file, or a directory of them
/// * `dictionary` - Path to the YAML word dictionary
/// * `bordered` - Draw a thin frame around every link
///
/// # Example
///
/// ```no_run
/// let reports = autolink::annotate("papers/", "links.yaml", false).unwrap();
/// println!("{} documents annotated", reports.len());
/// ```
pub fn annotate<P, Q>(input: P, dictionary: Q, bordered: bool) -> Result<Vec<ProcessReport>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let dictionary = UrlDictionary::load(dictionary)?;
    Annotator::new(dictionary)
        .with_border(bordered)
        .annotate_path(input)
}

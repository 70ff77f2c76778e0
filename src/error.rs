//! Error types for autolink library.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for autolink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The word dictionary could not be parsed.
    #[error("Invalid dictionary: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The input path cannot be annotated.
    #[error("Unsupported input {}: {reason}", path.display())]
    UnsupportedInput { path: PathBuf, reason: String },

    /// The file does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version we do not recognize.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error reading or writing the PDF object structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),
}

impl Error {
    pub(crate) fn unsupported(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::UnsupportedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

/// Reasons a single page's text layout could not be produced.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extraction program could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The extraction program ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    Status {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Reading the extraction output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The extraction output is not well-formed markup.
    #[error("malformed layout: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The extraction output describes no page.
    #[error("layout contains no <page> element")]
    MissingPage,

    /// A required geometry attribute is absent.
    #[error("<{element}> has no {attribute} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A geometry attribute is not a number.
    #[error("<{element}> attribute {attribute} is not a number: {value:?}")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

/// A page whose layout could not be extracted; the page is kept without links.
#[derive(Error, Debug)]
#[error("Bounding boxes of {} page {page_index} could not be parsed: {source}", path.display())]
pub struct PageExtractionError {
    /// Document the page belongs to.
    pub path: PathBuf,
    /// Zero-based page index.
    pub page_index: usize,
    /// Underlying cause.
    #[source]
    pub source: ExtractError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_unsupported_input_display() {
        let err = Error::unsupported("/tmp/notes.txt", "not a .pdf file");
        assert_eq!(
            err.to_string(),
            "Unsupported input /tmp/notes.txt: not a .pdf file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_page_extraction_error_names_file_and_page() {
        let err = PageExtractionError {
            path: PathBuf::from("report.pdf"),
            page_index: 3,
            source: ExtractError::MissingPage,
        };
        assert_eq!(
            err.to_string(),
            "Bounding boxes of report.pdf page 3 could not be parsed: layout contains no <page> element"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}

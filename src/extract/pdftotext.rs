//! [`LayoutExtractor`] backed by poppler's `pdftotext`.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;

use super::{parse_bbox_layout, LayoutExtractor};
use crate::error::ExtractError;
use crate::model::PageLayout;

const DEFAULT_PROGRAM: &str = "pdftotext";

/// Runs `pdftotext -f N -l N -bbox` once per page.
///
/// The call blocks until the tool exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct Pdftotext {
    program: OsString,
}

impl Pdftotext {
    /// Use `pdftotext` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific executable.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// The executable that will be launched.
    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
        }
    }
}

impl LayoutExtractor for Pdftotext {
    fn extract(&self, document: &Path, page_number: u32) -> Result<PageLayout, ExtractError> {
        // Removed when `scratch` drops, on success and on every error path.
        let scratch = tempfile::Builder::new().prefix("autolink-").tempdir()?;
        let target = scratch.path().join("page.html");
        let page = page_number.to_string();

        log::trace!(
            "{} -f {page} -l {page} -bbox {} {}",
            self.program().display(),
            document.display(),
            target.display()
        );

        let output = Command::new(&self.program)
            .args(["-f", page.as_str(), "-l", page.as_str(), "-bbox"])
            .arg(document)
            .arg(&target)
            .output()
            .map_err(|source| ExtractError::Launch {
                program: self.program().display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractError::Status {
                program: self.program().display().to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let xml = fs::read_to_string(&target)?;
        parse_bbox_layout(&xml)
    }
}

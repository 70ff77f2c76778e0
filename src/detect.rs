//! Input classification: PDF header sniffing and file extension checks.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Read the header of `path` and return the declared PDF version (e.g. "1.7").
pub fn pdf_version_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = [0u8; 8];
    let mut file = File::open(path)?;
    let read = file.read(&mut header)?;
    pdf_version_from_bytes(&header[..read])
}

/// Return the PDF version declared by the `%PDF-x.y` header in `data`.
pub fn pdf_version_from_bytes(data: &[u8]) -> Result<String> {
    let version = data
        .strip_prefix(PDF_MAGIC)
        .and_then(|rest| rest.get(..3))
        .ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}

/// True when the file name ends in exactly `.pdf`.
///
/// The match is case-sensitive: `REPORT.PDF` is not picked up.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "pdf")
}

//! Choosing which files to annotate and where the results go.
//!
//! | input               | output                               |
//! |---------------------|--------------------------------------|
//! | `docs/paper.pdf`    | `docs/paper_annotated.pdf`           |
//! | `docs/` (directory) | `docs_annotated/<same file names>`   |

use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::has_pdf_extension;
use crate::error::{Error, Result};

/// Inserted between the file stem and extension of an output path.
pub const ANNOTATED_SUFFIX: &str = "_annotated";

/// One input file and where its annotated copy is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// The jobs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    /// Directory to create before running, in directory mode
    pub output_dir: Option<PathBuf>,

    /// Files to annotate, in order
    pub jobs: Vec<Job>,
}

impl BatchPlan {
    /// Create the output directory if the plan has one.
    pub fn prepare(&self) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            if !dir.exists() {
                log::info!("Creating {}", dir.display());
                fs::create_dir(dir)?;
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Plan the jobs for a file or directory.
///
/// A file must end in `.pdf`. A directory contributes every regular
/// `*.pdf` file directly inside it, sorted by name; subdirectories are not
/// searched.
pub fn plan(input: &Path) -> Result<BatchPlan> {
    let input = fs::canonicalize(input)
        .map_err(|_| Error::unsupported(input, "no such file or directory"))?;

    if input.is_dir() {
        let output_dir = annotated_sibling(&input);
        let mut inputs = Vec::new();
        for entry in fs::read_dir(&input)? {
            let path = entry?.path();
            if path.is_file() && has_pdf_extension(&path) {
                inputs.push(path);
            }
        }
        inputs.sort();

        let jobs = inputs
            .into_iter()
            .filter_map(|path| {
                let output = output_dir.join(path.file_name()?);
                Some(Job {
                    input: path,
                    output,
                })
            })
            .collect();

        Ok(BatchPlan {
            output_dir: Some(output_dir),
            jobs,
        })
    } else if input.is_file() {
        if !has_pdf_extension(&input) {
            return Err(Error::unsupported(input, "not a .pdf file"));
        }
        let output = annotated_sibling(&input);
        Ok(BatchPlan {
            output_dir: None,
            jobs: vec![Job { input, output }],
        })
    } else {
        Err(Error::unsupported(input, "neither a file nor a directory"))
    }
}

/// `dir/name.ext` becomes `dir/name_annotated.ext`; `dir/name` becomes `dir/name_annotated`.
pub fn annotated_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_stem().unwrap_or_default().to_os_string();
    name.push(ANNOTATED_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

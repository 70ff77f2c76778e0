//! Document Processor: copies every page of an input PDF, links matching
//! words on each page and writes the annotated copy.

use std::path::{Path, PathBuf};

use crate::annotate::{AnnotateOptions, PageAnnotator};
use crate::batch::{self, BatchPlan};
use crate::dictionary::UrlDictionary;
use crate::error::{PageExtractionError, Result};
use crate::extract::{LayoutExtractor, Pdftotext};
use crate::pdf::{OutputDocument, SourceDocument};

/// Outcome of annotating one document.
#[derive(Debug)]
pub struct ProcessReport {
    /// Document that was read
    pub input: PathBuf,

    /// Document that was written
    pub output: PathBuf,

    /// Links added to each page, indexed by page
    pub links_per_page: Vec<usize>,

    /// Pages that were copied without links because extraction failed
    pub failures: Vec<PageExtractionError>,
}

impl ProcessReport {
    /// Number of pages in the output.
    pub fn page_count(&self) -> usize {
        self.links_per_page.len()
    }

    /// Total links added to the document.
    pub fn link_count(&self) -> usize {
        self.links_per_page.iter().sum()
    }

    /// True when every page's layout was extracted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Annotates documents with links from a [`UrlDictionary`].
///
/// # Example
///
/// ```no_run
/// use autolink::{Annotator, UrlDictionary};
///
/// let dictionary = UrlDictionary::load("links.yaml")?;
/// let report = Annotator::new(dictionary)
///     .without_border()
///     .process("paper.pdf", "paper_annotated.pdf")?;
/// println!("{} links on {} pages", report.link_count(), report.page_count());
/// # Ok::<(), autolink::Error>(())
/// ```
pub struct Annotator<E = Pdftotext> {
    dictionary: UrlDictionary,
    options: AnnotateOptions,
    extractor: E,
}

impl Annotator<Pdftotext> {
    /// Create an annotator that extracts layouts with `pdftotext`.
    pub fn new(dictionary: UrlDictionary) -> Self {
        Self {
            dictionary,
            options: AnnotateOptions::default(),
            extractor: Pdftotext::default(),
        }
    }
}

impl<E: LayoutExtractor> Annotator<E> {
    /// Replace all annotation options.
    pub fn with_options(mut self, options: AnnotateOptions) -> Self {
        self.options = options;
        self
    }

    /// Choose a visible or invisible border.
    pub fn with_border(mut self, visible: bool) -> Self {
        self.options = self.options.with_border(visible);
        self
    }

    /// Make links invisible.
    pub fn without_border(self) -> Self {
        self.with_border(false)
    }

    /// Set the padding around each word box.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.options = self.options.with_padding(padding);
        self
    }

    /// Use a different layout extractor.
    pub fn with_extractor<F: LayoutExtractor>(self, extractor: F) -> Annotator<F> {
        Annotator {
            dictionary: self.dictionary,
            options: self.options,
            extractor,
        }
    }

    pub fn dictionary(&self) -> &UrlDictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Annotate `input` and write the result to `output`.
    ///
    /// Pages are handled in order. A page whose layout cannot be extracted is
    /// still copied, without links, and recorded in the report. Errors
    /// reading the input or writing the output abort the document.
    pub fn process<P, Q>(&self, input: P, output: Q) -> Result<ProcessReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let output = output.as_ref();
        log::info!("Processing {}", input.display());

        let source = SourceDocument::open(input)?;
        let mut document = OutputDocument::new(&source);
        let annotator = PageAnnotator::new(&self.dictionary, self.options);

        let mut report = ProcessReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            links_per_page: Vec::with_capacity(source.page_count()),
            failures: Vec::new(),
        };

        for page_index in 0..source.page_count() {
            document.copy_page(page_index)?;

            let page_number = (page_index + 1) as u32;
            let layout = match self.extractor.extract(input, page_number) {
                Ok(layout) => layout,
                Err(source) => {
                    let failure = PageExtractionError {
                        path: input.to_path_buf(),
                        page_index,
                        source,
                    };
                    log::warn!("{}", failure);
                    report.failures.push(failure);
                    report.links_per_page.push(0);
                    continue;
                }
            };

            let requests = annotator.annotate(page_index, &layout);
            log::debug!(
                "page {}: {} words, {} links",
                page_number,
                layout.word_count(),
                requests.len()
            );
            for request in &requests {
                document.add_link(request)?;
            }
            report.links_per_page.push(requests.len());
        }

        document.save(output)?;
        log::info!("File {} written", output.display());

        Ok(report)
    }

    /// Annotate a single PDF or every PDF in a directory.
    ///
    /// See [`batch::plan`] for how output paths are chosen.
    pub fn annotate_path<P: AsRef<Path>>(&self, input: P) -> Result<Vec<ProcessReport>> {
        let plan = batch::plan(input.as_ref())?;
        self.run(&plan)
    }

    /// Execute a prepared plan, one document after another.
    pub fn run(&self, plan: &BatchPlan) -> Result<Vec<ProcessReport>> {
        plan.prepare()?;
        plan.jobs
            .iter()
            .map(|job| self.process(&job.input, &job.output))
            .collect()
    }
}

impl<E> std::fmt::Debug for Annotator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Annotator")
            .field("entries", &self.dictionary.len())
            .field("options", &self.options)
            .finish()
    }
}

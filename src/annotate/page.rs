//! Matching the words of one page against the dictionary.

use super::geometry::to_annotation_rect;
use super::options::AnnotateOptions;
use crate::dictionary::UrlDictionary;
use crate::model::{AnnotationRequest, PageLayout};

/// Turns a page layout into link requests.
#[derive(Debug, Clone, Copy)]
pub struct PageAnnotator<'a> {
    dictionary: &'a UrlDictionary,
    options: AnnotateOptions,
}

impl<'a> PageAnnotator<'a> {
    pub fn new(dictionary: &'a UrlDictionary, options: AnnotateOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// One request per matching word, in extraction order.
    ///
    /// Repeated words yield repeated (possibly overlapping) links.
    pub fn annotate(&self, page_index: usize, layout: &PageLayout) -> Vec<AnnotationRequest> {
        layout
            .words
            .iter()
            .filter_map(|word| {
                let url = self.dictionary.lookup_word(&word.text)?;
                Some(AnnotationRequest {
                    page_index,
                    rect: to_annotation_rect(word, layout.height, self.options.padding),
                    url: url.to_string(),
                    border: self.options.border,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderStyle, Rect, WordGeometry};

    fn dictionary() -> UrlDictionary {
        UrlDictionary::from_pairs([
            ("Click", "https://example.com"),
            ("rust", "https://www.rust-lang.org"),
        ])
    }

    fn layout() -> PageLayout {
        PageLayout::new(200.0)
            .with_word(WordGeometry::new("Please", 0.0, 8.0, 100.0, 80.0))
            .with_word(WordGeometry::new("CLICK", 10.0, 50.0, 100.0, 80.0))
            .with_word(WordGeometry::new("here", 52.0, 70.0, 100.0, 80.0))
            .with_word(WordGeometry::new(" Rust ", 0.0, 20.0, 150.0, 130.0))
    }

    #[test]
    fn test_matches_in_extraction_order() {
        let dict = dictionary();
        let annotator = PageAnnotator::new(&dict, AnnotateOptions::default());
        let requests = annotator.annotate(4, &layout());

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://example.com");
        assert_eq!(requests[0].rect, Rect::new(9.0, 103.0, 51.0, 79.0));
        assert_eq!(requests[0].page_index, 4);
        assert_eq!(requests[0].border, BorderStyle::VISIBLE);
        assert_eq!(requests[1].url, "https://www.rust-lang.org");
    }

    #[test]
    fn test_unmatched_words_produce_nothing() {
        let dict = dictionary();
        let annotator = PageAnnotator::new(&dict, AnnotateOptions::default());
        let layout = PageLayout::new(100.0).with_word(WordGeometry::new("clicks", 0.0, 1.0, 0.0, 1.0));
        assert!(annotator.annotate(0, &layout).is_empty());
    }

    #[test]
    fn test_empty_dictionary_never_matches() {
        let dict = UrlDictionary::new();
        let annotator = PageAnnotator::new(&dict, AnnotateOptions::default());
        assert!(annotator.annotate(0, &layout()).is_empty());
    }

    #[test]
    fn test_repeated_word_is_not_deduplicated() {
        let dict = dictionary();
        let annotator = PageAnnotator::new(&dict, AnnotateOptions::new().without_border());
        let word = WordGeometry::new("click", 1.0, 2.0, 3.0, 4.0);
        let layout = PageLayout::new(10.0).with_word(word.clone()).with_word(word);

        let requests = annotator.annotate(0, &layout);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].border, BorderStyle::HIDDEN);
    }
}

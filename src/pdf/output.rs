//! Output documents: copied pages plus link annotations.

use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, ObjectId};

use super::source::SourceDocument;
use crate::error::{Error, Result};
use crate::model::AnnotationRequest;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against cyclic `/Parent` chains in damaged files.
const MAX_TREE_DEPTH: usize = 64;

/// A document being assembled from the pages of a [`SourceDocument`].
///
/// It starts with no pages. Nothing touches the disk until [`save`](Self::save).
pub struct OutputDocument {
    doc: LopdfDocument,
    source_pages: Vec<ObjectId>,
    pages: Vec<ObjectId>,
}

impl OutputDocument {
    /// Create an empty output that can copy pages from `source`.
    pub fn new(source: &SourceDocument) -> Self {
        Self {
            doc: source.doc.clone(),
            source_pages: source.pages.clone(),
            pages: Vec::new(),
        }
    }

    /// Number of pages copied so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append source page `index` (zero-based) to the output.
    ///
    /// Inherited attributes are folded into the page so it renders the same
    /// once the page tree is flattened.
    pub fn copy_page(&mut self, index: usize) -> Result<()> {
        let source_id = *self
            .source_pages
            .get(index)
            .ok_or(Error::PageOutOfRange(index, self.source_pages.len()))?;

        let inherited = self.inherited_attributes(source_id)?;
        let mut page = self.doc.get_dictionary(source_id)?.clone();
        for (key, value) in inherited {
            page.set(key, value);
        }

        let page_id = if self.pages.contains(&source_id) {
            page.remove(b"Annots");
            self.doc.add_object(page)
        } else {
            *self.doc.get_object_mut(source_id)? = Object::Dictionary(page);
            source_id
        };
        self.pages.push(page_id);
        Ok(())
    }

    fn inherited_attributes(&self, page_id: ObjectId) -> Result<Vec<(&'static [u8], Object)>> {
        let page = self.doc.get_dictionary(page_id)?;
        let mut missing: Vec<&'static [u8]> =
            INHERITABLE.into_iter().filter(|key| !page.has(key)).collect();
        let mut found = Vec::new();

        let mut parent = parent_of(page);
        let mut depth = 0;
        while let Some(node_id) = parent {
            if missing.is_empty() || depth == MAX_TREE_DEPTH {
                break;
            }
            let node = self.doc.get_dictionary(node_id)?;
            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    found.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = parent_of(node);
            depth += 1;
        }

        Ok(found)
    }

    /// Attach a URI link annotation to output page `request.page_index`.
    pub fn add_link(&mut self, request: &AnnotationRequest) -> Result<()> {
        let page_id = *self
            .pages
            .get(request.page_index)
            .ok_or(Error::PageOutOfRange(request.page_index, self.pages.len()))?;

        let action = dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(request.url.as_str()),
        };
        let annotation = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "P" => page_id,
            "Rect" => request.rect.to_pdf_array(),
            "Border" => request.border.to_pdf_array(),
            "A" => action,
        };
        let annotation_id = self.doc.add_object(annotation);

        let mut items = self.existing_annotations(page_id)?;
        items.push(Object::Reference(annotation_id));
        self.doc.get_dictionary_mut(page_id)?.set("Annots", items);
        Ok(())
    }

    /// The page's `/Annots` entries as a fresh array.
    ///
    /// An indirect `/Annots` array may be shared with other pages, so it is
    /// copied rather than appended to in place.
    fn existing_annotations(&self, page_id: ObjectId) -> Result<Vec<Object>> {
        let items = match self.doc.get_dictionary(page_id)?.get(b"Annots") {
            Ok(Object::Array(items)) => items.clone(),
            Ok(Object::Reference(array_id)) => match self.doc.get_object(*array_id) {
                Ok(Object::Array(items)) => items.clone(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Ok(items)
    }

    /// Write the document to `path` in one step.
    ///
    /// Bytes go to a temporary file next to `path` that is renamed into place
    /// only after the whole document was written.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".autolink-").suffix(".pdf.part");
        // Same mode a plain create would get; the umask still applies.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut staged = builder.tempfile_in(dir)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            self.save_to(&mut writer)?;
            writer.flush()?;
        }
        staged.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Serialize the document into `writer`.
    pub fn save_to<W: Write>(mut self, writer: &mut W) -> Result<()> {
        self.flatten_page_tree()?;
        self.doc.save_to(writer)?;
        Ok(())
    }

    /// Replace the page tree with a single node listing the copied pages.
    fn flatten_page_tree(&mut self) -> Result<()> {
        let root_id = self.doc.trailer.get(b"Root")?.as_reference()?;
        let tree_id = self.doc.get_dictionary(root_id)?.get(b"Pages")?.as_reference()?;

        for &page_id in &self.pages {
            self.doc
                .get_dictionary_mut(page_id)?
                .set("Parent", Object::Reference(tree_id));
        }

        let kids: Vec<Object> = self.pages.iter().copied().map(Object::Reference).collect();
        let tree = self.doc.get_dictionary_mut(tree_id)?;
        tree.remove(b"Parent");
        tree.set("Kids", kids);
        tree.set("Count", self.pages.len() as i64);

        let pruned = self.doc.prune_objects();
        log::debug!("pruned {} unreferenced objects", pruned.len());
        Ok(())
    }
}

fn parent_of(node: &Dictionary) -> Option<ObjectId> {
    node.get(b"Parent").and_then(Object::as_reference).ok()
}

impl std::fmt::Debug for OutputDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDocument")
            .field("pages", &self.pages)
            .finish()
    }
}

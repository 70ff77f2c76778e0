//! Shared helpers: in-memory PDFs, canned extractors and link inspection.

#![allow(dead_code)]

use std::path::Path;

use autolink::{ExtractError, PageLayout};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

fn text_stream(doc: &mut Document, text: &str) -> ObjectId {
    let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
    doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()))
}

fn font_resources() -> Dictionary {
    dictionary! {
        "Font" => dictionary! {
            "F1" => dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Helvetica",
            },
        },
    }
}

fn finish(mut doc: Document, pages_id: ObjectId) -> Vec<u8> {
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// A flat PDF whose page `n` shows the text `texts[n]`.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = texts
        .iter()
        .map(|text| {
            let contents = text_stream(&mut doc, text);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Resources" => font_resources(),
                "Contents" => contents,
            });
            page_id.into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        }),
    );
    finish(doc, pages_id)
}

/// A two-page PDF whose pages inherit `MediaBox` and `Resources` from an
/// intermediate page-tree node.
pub fn pdf_with_nested_tree() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();
    let branch_id = doc.new_object_id();

    let kids: Vec<Object> = ["first", "second"]
        .iter()
        .map(|text| {
            let contents = text_stream(&mut doc, text);
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => branch_id,
                "Contents" => contents,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        branch_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Parent" => root_id,
            "Count" => 2,
            "Kids" => kids,
            "MediaBox" => vec![0.into(), 0.into(), 300.into(), 400.into()],
            "Resources" => font_resources(),
        }),
    );
    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => 2,
            "Kids" => vec![Object::Reference(branch_id)],
        }),
    );
    finish(doc, root_id)
}

/// A one-page PDF that already carries a text annotation, referenced either
/// from an inline `/Annots` array or from an indirect one.
pub fn pdf_with_existing_annotation(indirect: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let note_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => vec![10.into(), 10.into(), 30.into(), 30.into()],
        "Contents" => Object::string_literal("existing note"),
    });
    let annots: Object = if indirect {
        doc.add_object(Object::Array(vec![note_id.into()])).into()
    } else {
        Object::Array(vec![note_id.into()])
    };

    let contents = text_stream(&mut doc, "annotated");
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => contents,
        "Annots" => annots,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => 1,
            "Kids" => vec![Object::Reference(page_id)],
        }),
    );
    finish(doc, pages_id)
}

/// A two-page PDF whose pages both point `/Annots` at one indirect array
/// holding a single text annotation.
pub fn pdf_with_shared_annotations() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let note_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => vec![10.into(), 10.into(), 30.into(), 30.into()],
        "Contents" => Object::string_literal("shared note"),
    });
    let annots_id = doc.add_object(Object::Array(vec![note_id.into()]));

    let kids: Vec<Object> = ["first", "second"]
        .iter()
        .map(|text| {
            let contents = text_stream(&mut doc, text);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => contents,
                "Annots" => annots_id,
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => 2,
            "Kids" => kids,
        }),
    );
    finish(doc, pages_id)
}

/// Extractor that returns `layouts[page_number - 1]`, or an empty layout
/// for pages beyond the list.
pub fn canned(layouts: Vec<PageLayout>) -> impl Fn(&Path, u32) -> Result<PageLayout, ExtractError> {
    move |_document: &Path, page_number: u32| -> Result<PageLayout, ExtractError> {
        Ok(layouts
            .get(page_number as usize - 1)
            .cloned()
            .unwrap_or_else(|| PageLayout::new(792.0)))
    }
}

/// A link annotation read back from a written document.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub rect: Vec<f32>,
    pub url: String,
    pub border: Vec<i64>,
}

fn number(object: &Object) -> f32 {
    match object {
        Object::Integer(v) => *v as f32,
        Object::Real(v) => *v,
        other => panic!("not a number: {:?}", other),
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap(),
        other => other,
    }
}

/// All annotation dictionaries on a page.
pub fn annotations(doc: &Document, page_id: ObjectId) -> Vec<Dictionary> {
    let page = doc.get_dictionary(page_id).unwrap();
    let Ok(annots) = page.get(b"Annots") else {
        return Vec::new();
    };
    let Object::Array(items) = resolve(doc, annots) else {
        panic!("/Annots is not an array");
    };
    items
        .iter()
        .map(|item| match resolve(doc, item) {
            Object::Dictionary(dict) => dict.clone(),
            other => panic!("annotation is not a dictionary: {:?}", other),
        })
        .collect()
}

/// The URI links on a page, in `/Annots` order.
pub fn links(doc: &Document, page_id: ObjectId) -> Vec<Link> {
    annotations(doc, page_id)
        .into_iter()
        .filter(|annot| matches!(annot.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Link"))
        .map(|annot| {
            let Ok(Object::Array(rect)) = annot.get(b"Rect") else {
                panic!("link without /Rect");
            };
            let Ok(Object::Array(border)) = annot.get(b"Border") else {
                panic!("link without /Border");
            };
            let Object::Dictionary(action) = resolve(doc, annot.get(b"A").unwrap()) else {
                panic!("link without action");
            };
            let Ok(Object::String(url, _)) = action.get(b"URI") else {
                panic!("action without /URI");
            };
            Link {
                rect: rect.iter().map(number).collect(),
                url: String::from_utf8(url.clone()).unwrap(),
                border: border.iter().map(|o| number(o) as i64).collect(),
            }
        })
        .collect()
}

/// Page object ids of a written document, in order.
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

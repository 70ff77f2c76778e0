//! Parser for the XHTML written by `pdftotext -bbox`.
//!
//! ```xml
//! <doc>
//!   <page width="612.000000" height="792.000000">
//!     <word xMin="56.800000" yMin="57.208000" xMax="86.032000" yMax="69.196000">Hello</word>
//!   </page>
//! </doc>
//! ```

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::ExtractError;
use crate::model::{PageLayout, WordGeometry};

/// Parse bbox output into a [`PageLayout`].
///
/// The height comes from the first `<page>` element. Every `<word>` in the
/// document is collected in document order.
pub fn parse_bbox_layout(xml: &str) -> Result<PageLayout, ExtractError> {
    // pdftotext emits an XHTML doctype
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let page = doc
        .descendants()
        .find(|n| n.has_tag_name("page"))
        .ok_or(ExtractError::MissingPage)?;
    let mut layout = PageLayout::new(number_attr(page, "page", "height")?);

    for node in doc.descendants().filter(|n| n.has_tag_name("word")) {
        layout.push(WordGeometry {
            text: direct_text(node),
            x_min: number_attr(node, "word", "xMin")?,
            x_max: number_attr(node, "word", "xMax")?,
            y_min: number_attr(node, "word", "yMin")?,
            y_max: number_attr(node, "word", "yMax")?,
        });
    }

    Ok(layout)
}

/// Concatenated text children, ignoring nested elements.
fn direct_text(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

fn number_attr(
    node: Node,
    element: &'static str,
    attribute: &'static str,
) -> Result<f32, ExtractError> {
    let raw = node
        .attribute(attribute)
        .ok_or(ExtractError::MissingAttribute { element, attribute })?;
    raw.trim()
        .parse()
        .map_err(|_| ExtractError::InvalidNumber {
            element,
            attribute,
            value: raw.to_string(),
        })
}

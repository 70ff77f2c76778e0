//! Link annotations waiting to be written.

use lopdf::Object;
use serde::{Deserialize, Serialize};

/// Rectangle in PDF annotation space, stored as `[left bottom right top]`.
///
/// No ordering between the corners is enforced; viewers normalize the
/// rectangle when they display it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Rect {
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// PDF `/Rect` array.
    pub fn to_pdf_array(&self) -> Object {
        Object::Array(vec![
            Object::Real(self.left),
            Object::Real(self.bottom),
            Object::Real(self.right),
            Object::Real(self.top),
        ])
    }
}

/// PDF `/Border` array: horizontal corner radius, vertical corner radius, width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub horizontal_radius: u32,
    pub vertical_radius: u32,
    pub width: u32,
}

impl BorderStyle {
    /// `[1 1 1]`: a thin visible frame around every link.
    pub const VISIBLE: BorderStyle = BorderStyle {
        horizontal_radius: 1,
        vertical_radius: 1,
        width: 1,
    };

    /// `[0 0 0]`: links are clickable but not drawn.
    pub const HIDDEN: BorderStyle = BorderStyle {
        horizontal_radius: 0,
        vertical_radius: 0,
        width: 0,
    };

    /// Pick the visible or hidden style.
    pub fn bordered(visible: bool) -> Self {
        if visible {
            Self::VISIBLE
        } else {
            Self::HIDDEN
        }
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0
    }

    /// PDF `/Border` array.
    pub fn to_pdf_array(&self) -> Object {
        Object::Array(vec![
            Object::Integer(self.horizontal_radius.into()),
            Object::Integer(self.vertical_radius.into()),
            Object::Integer(self.width.into()),
        ])
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A link to attach to one output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRequest {
    /// Zero-based page index
    pub page_index: usize,

    /// Clickable area
    pub rect: Rect,

    /// Link target
    pub url: String,

    /// Border drawn around the clickable area
    pub border: BorderStyle,
}

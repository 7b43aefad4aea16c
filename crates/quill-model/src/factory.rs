//! Element construction.
//!
//! Callers never build elements by hand while composing: they name a
//! kind and hand over a payload, and the factory decides the variant.

use crate::{ContentElement, ElementKind};

/// Builds content elements from a kind plus optional payload.
pub struct ElementFactory;

impl ElementFactory {
    /// Creates an element of the given kind.
    ///
    /// `content` is used by `Text` and `Image` and ignored otherwise.
    pub fn create(kind: ElementKind, content: &str) -> ContentElement {
        match kind {
            ElementKind::Text => ContentElement::text(content),
            ElementKind::Image => ContentElement::image(content),
            ElementKind::LineBreak => ContentElement::LineBreak,
            ElementKind::Tab => ContentElement::Tab,
        }
    }

    /// Creates an element from a textual kind tag.
    ///
    /// Returns `None` for a tag outside the known kinds. No element is
    /// guessed or defaulted.
    pub fn create_from_tag(tag: &str, content: &str) -> Option<ContentElement> {
        let kind = tag.parse::<ElementKind>().ok()?;
        Some(Self::create(kind, content))
    }
}

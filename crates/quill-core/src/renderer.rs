//! Rendering documents to flat text.
//!
//! ## Learning: Borrowed References
//!
//! `Renderer<'a>` holds `&'a Document`. The lifetime ties the renderer
//! to the document it reads: the compiler rejects any use of the
//! renderer after the document is dropped, and nobody can append to
//! the document while a renderer is alive.

use quill_model::Document;

/// Produces the text form of one document.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    document: &'a Document,
}

impl<'a> Renderer<'a> {
    /// Binds a renderer to a document.
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns the bound document.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Renders every element in order, with no separators.
    ///
    /// Output is rebuilt on every call.
    pub fn render(&self) -> String {
        let capacity = self.document.iter().map(|e| e.rendered_len()).sum();
        let mut out = String::with_capacity(capacity);
        for element in self.document {
            out.push_str(&element.render());
        }
        out
    }
}

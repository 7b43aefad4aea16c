//! # Quill Model
//!
//! The document model: self-rendering content elements, the factory
//! that builds them, and the ordered document that owns them.
//!
//! ## Key Concepts
//!
//! ### Closed Sum Types
//! - `ContentElement` is an enum, not a trait object: the set of
//!   element kinds is fixed, so `match` checks every case at compile time
//! - `ElementKind` is the payload-free tag used to request an element
//!
//! ### Ownership
//! - `Document::append` takes the element by value; the document owns
//!   it from then on
//! - `Document::elements` hands out a shared slice, so callers can read
//!   but never reorder or remove

mod document;
mod element;
mod factory;
mod parse;

pub use document::{Document, DocumentId};
pub use element::{ContentElement, ElementKind, IMAGE_MARKER_CLOSE, IMAGE_MARKER_OPEN};
pub use factory::ElementFactory;
pub use parse::parse_rendered;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur in model operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown content kind: {0:?}")]
    InvalidKind(String),
}

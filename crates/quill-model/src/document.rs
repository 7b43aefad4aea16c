//! Documents.
//!
//! ## Learning: Newtypes
//!
//! `DocumentId` wraps a `Uuid` so an id can't be confused with any
//! other string or number floating around a session.

use std::fmt;
use std::slice;

use uuid::Uuid;

use crate::ContentElement;

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new unique document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of content elements.
///
/// Insertion order is the only order, and it is also the render order.
/// `append` is the only mutator: elements are never reordered or
/// removed once added.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique identifier
    id: DocumentId,

    /// Owned elements, in insertion order
    elements: Vec<ContentElement>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            id: DocumentId::new(),
            elements: Vec::new(),
        }
    }

    /// Returns the document ID.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Appends an element, taking ownership of it.
    pub fn append(&mut self, element: ContentElement) {
        self.elements.push(element);
    }

    /// Returns the elements in insertion order.
    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, ContentElement> {
        self.elements.iter()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ContentElement;
    type IntoIter = slice::Iter<'a, ContentElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extending is repeated `append`.
impl Extend<ContentElement> for Document {
    fn extend<T: IntoIterator<Item = ContentElement>>(&mut self, iter: T) {
        for element in iter {
            self.append(element);
        }
    }
}

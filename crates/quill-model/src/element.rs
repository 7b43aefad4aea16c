//! Content elements.
//!
//! ## Learning: Enums with Payloads
//!
//! Each variant carries only the data it needs. `Text` and `Image`
//! own their strings; `LineBreak` and `Tab` carry nothing at all.
//! Rendering is a single `match`, so adding a kind means the compiler
//! points at every place that must handle it.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{ModelError, ModelResult};

/// Opening half of the image marker.
pub const IMAGE_MARKER_OPEN: &str = "[ Image : ";

/// Closing half of the image marker.
pub const IMAGE_MARKER_CLOSE: &str = " ]";

/// A self-rendering unit of document content.
///
/// Elements are immutable once built. Rendering is pure: the same
/// element always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentElement {
    /// A run of text, rendered verbatim
    Text(String),
    /// An image reference, rendered as `[ Image : <path> ]`
    Image(String),
    /// A line break, rendered as `\n`
    LineBreak,
    /// A tab, rendered as `\t`
    Tab,
}

impl ContentElement {
    /// Creates a text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates an image element from a path or reference.
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(path.into())
    }

    /// Returns the kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::LineBreak => ElementKind::LineBreak,
            Self::Tab => ElementKind::Tab,
        }
    }

    /// Renders the element to text.
    ///
    /// # Learning: Cow (Clone-on-Write)
    ///
    /// Text, line breaks and tabs borrow; only images allocate,
    /// because the marker has to be assembled around the path.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Image(path) => {
                Cow::Owned(format!("{IMAGE_MARKER_OPEN}{path}{IMAGE_MARKER_CLOSE}"))
            }
            Self::LineBreak => Cow::Borrowed("\n"),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }

    /// Returns the rendered length in bytes without rendering.
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Image(path) => IMAGE_MARKER_OPEN.len() + path.len() + IMAGE_MARKER_CLOSE.len(),
            Self::LineBreak | Self::Tab => 1,
        }
    }
}

impl fmt::Display for ContentElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The closed set of content kinds an element can be requested as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Image,
    LineBreak,
    Tab,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 4] = [Self::Text, Self::Image, Self::LineBreak, Self::Tab];

    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::LineBreak => "newline",
            Self::Tab => "tab",
        }
    }

    /// Returns true if elements of this kind use their content payload.
    pub fn takes_content(&self) -> bool {
        matches!(self, Self::Text | Self::Image)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "newline" | "line-break" | "linebreak" => Ok(Self::LineBreak),
            "tab" => Ok(Self::Tab),
            _ => Err(ModelError::InvalidKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_per_kind() {
        assert_eq!(ContentElement::text("Hello").render(), "Hello");
        assert_eq!(ContentElement::image("pic.png").render(), "[ Image : pic.png ]");
        assert_eq!(ContentElement::LineBreak.render(), "\n");
        assert_eq!(ContentElement::Tab.render(), "\t");
    }

    #[test]
    fn test_empty_payloads_are_valid() {
        assert_eq!(ContentElement::text("").render(), "");
        assert_eq!(ContentElement::image("").render(), "[ Image :  ]");
    }

    #[test]
    fn test_render_is_repeatable() {
        let element = ContentElement::image("diagram.svg");
        assert_eq!(element.render(), element.render());
    }

    #[test]
    fn test_rendered_len_matches_render() {
        for element in [
            ContentElement::text("héllo"),
            ContentElement::image("ünïcode.png"),
            ContentElement::LineBreak,
            ContentElement::Tab,
        ] {
            assert_eq!(element.rendered_len(), element.render().len());
        }
    }

    #[test]
    fn test_kind_tags() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
        }
        assert_eq!("Line-Break".parse::<ElementKind>().unwrap(), ElementKind::LineBreak);
        assert_eq!(" TAB ".parse::<ElementKind>().unwrap(), ElementKind::Tab);
        assert!("".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_kind_of_element() {
        assert_eq!(ContentElement::text("x").kind(), ElementKind::Text);
        assert_eq!(ContentElement::Tab.kind(), ElementKind::Tab);
        assert!(ElementKind::Image.takes_content());
        assert!(!ElementKind::LineBreak.takes_content());
    }
}

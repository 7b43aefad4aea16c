//! Rebuilding elements from rendered text.
//!
//! Rendered output is flat text with no element boundaries, so the
//! parser recovers what the render conventions make recognisable:
//! image markers, `\n` and `\t`. Everything in between becomes a text
//! run. Adjacent text elements merge into one run, and literal text
//! that happens to look like an image marker comes back as an image.
//!
//! A marker ends at the last ` ]` before the next `\n`, `\t`, marker
//! opening or end of input. Image paths may therefore contain ` ]`.
//! A path survives a round trip as long as it holds no `\n`, `\t` or
//! marker opening, and the text after it on the same line holds no ` ]`.
//!
//! Rendering the parsed elements always reproduces the input exactly.

use crate::{ContentElement, IMAGE_MARKER_CLOSE, IMAGE_MARKER_OPEN};

/// Parses rendered text back into content elements.
pub fn parse_rendered(text: &str) -> Vec<ContentElement> {
    let mut elements = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        let (element, consumed) = if let Some(path) = image_at(rest) {
            let consumed = IMAGE_MARKER_OPEN.len() + path.len() + IMAGE_MARKER_CLOSE.len();
            (ContentElement::image(path), consumed)
        } else if rest.starts_with('\n') {
            (ContentElement::LineBreak, 1)
        } else if rest.starts_with('\t') {
            (ContentElement::Tab, 1)
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if run_start < pos {
            elements.push(ContentElement::text(&text[run_start..pos]));
        }
        elements.push(element);
        pos += consumed;
        run_start = pos;
    }

    if run_start < text.len() {
        elements.push(ContentElement::text(&text[run_start..]));
    }

    elements
}

/// Returns the image path if `rest` starts with a complete marker.
fn image_at(rest: &str) -> Option<&str> {
    let body = rest.strip_prefix(IMAGE_MARKER_OPEN)?;
    let mut limit = body.find(|c: char| c == '\n' || c == '\t').unwrap_or(body.len());
    if let Some(next) = body[..limit].find(IMAGE_MARKER_OPEN) {
        limit = next;
    }
    let end = body[..limit].rfind(IMAGE_MARKER_CLOSE)?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render_all(elements: &[ContentElement]) -> String {
        elements.iter().map(|e| e.render()).collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_rendered("").is_empty());
    }

    #[test]
    fn test_parse_mixed() {
        let elements = parse_rendered("Hello\n\t[ Image : pic.png ]World");
        assert_eq!(
            elements,
            vec![
                ContentElement::text("Hello"),
                ContentElement::LineBreak,
                ContentElement::Tab,
                ContentElement::image("pic.png"),
                ContentElement::text("World"),
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_is_text() {
        let elements = parse_rendered("[ Image : never closed");
        assert_eq!(elements, vec![ContentElement::text("[ Image : never closed")]);
    }

    #[test]
    fn test_empty_image_path() {
        assert_eq!(parse_rendered("[ Image :  ]"), vec![ContentElement::image("")]);
    }

    #[test]
    fn test_image_path_with_spaces() {
        let elements = parse_rendered("[ Image : my photos/beach day.jpg ]");
        assert_eq!(elements, vec![ContentElement::image("my photos/beach day.jpg")]);
    }

    #[test]
    fn test_image_path_with_closing_bracket() {
        let image = ContentElement::image("a ]b.png");
        assert_eq!(parse_rendered(&image.render()), vec![image]);
    }

    #[test]
    fn test_adjacent_images_stay_separate() {
        let elements = parse_rendered("[ Image : a.png ][ Image : b ]c.png ]\tend");
        assert_eq!(
            elements,
            vec![
                ContentElement::image("a.png"),
                ContentElement::image("b ]c.png"),
                ContentElement::Tab,
                ContentElement::text("end"),
            ]
        );
    }

    #[test]
    fn test_marker_does_not_cross_line_break() {
        let elements = parse_rendered("[ Image : open\nclosed ]");
        assert_eq!(
            elements,
            vec![
                ContentElement::text("[ Image : open"),
                ContentElement::LineBreak,
                ContentElement::text("closed ]"),
            ]
        );
    }

    #[test]
    fn test_adjacent_text_merges() {
        let source = [ContentElement::text("ab"), ContentElement::text("cd")];
        assert_eq!(parse_rendered(&render_all(&source)), vec![ContentElement::text("abcd")]);
    }

    fn arb_element() -> impl Strategy<Value = ContentElement> {
        prop_oneof![
            "[a-zA-Z0-9 .,é]{1,12}".prop_map(ContentElement::Text),
            "[a-z0-9/_. \\[\\]]{0,12}".prop_map(ContentElement::Image),
            Just(ContentElement::LineBreak),
            Just(ContentElement::Tab),
        ]
    }

    proptest! {
        #[test]
        fn prop_render_parse_is_identity(text in "[\\PC\\n\\t]{0,64}") {
            prop_assert_eq!(render_all(&parse_rendered(&text)), text);
        }

        #[test]
        fn prop_rendered_documents_survive(
            elements in prop::collection::vec(arb_element(), 0..24)
        ) {
            let rendered = render_all(&elements);
            let parsed = parse_rendered(&rendered);
            prop_assert_eq!(render_all(&parsed), rendered);
        }

        #[test]
        fn prop_image_paths_survive(path in "[a-z0-9/_. \\[\\]]{0,16}") {
            let source = vec![
                ContentElement::image(path),
                ContentElement::LineBreak,
                ContentElement::image("next.png"),
            ];
            prop_assert_eq!(parse_rendered(&render_all(&source)), source);
        }
    }
}

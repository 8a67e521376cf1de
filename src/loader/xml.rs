//! Event-based XML parsing into the element tree.

use crate::error::{LoadErrorKind, Result, TagDiffError};
use crate::model::{Document, Element};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Load and parse an XML file into a [`Document`].
///
/// A missing file is reported as a distinct error kind so the CLI can tell
/// "wrong path" apart from "broken XML".
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(TagDiffError::load(
            format!("at {}", path.display()),
            LoadErrorKind::FileNotFound(path.to_path_buf()),
        ));
    }

    tracing::info!("Reading XML file: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| TagDiffError::io(path, e))?;

    let root = parse_document_str(&content)
        .map_err(|e| attach_path_context(e, path))?;

    Ok(Document::new(root, path))
}

/// Parse XML from a string into its root [`Element`].
///
/// Whitespace-only text nodes are dropped; mixed text inside an element is
/// concatenated in document order. Comments, processing instructions, and
/// the XML declaration are skipped.
pub fn parse_document_str(content: &str) -> Result<Element> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // Parents of the element currently being filled, root at the bottom.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(invalid_xml("content after the root element closed"));
                }
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(invalid_xml("content after the root element closed"));
                }
                let elem = element_from_start(&start)?;
                attach(&mut stack, &mut root, elem);
            }
            Ok(Event::End(_)) => {
                let elem = stack.pop().ok_or_else(|| invalid_xml("unbalanced end tag"))?;
                attach(&mut stack, &mut root, elem);
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| invalid_xml(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                }
            }
            Ok(Event::CData(cdata)) => {
                let bytes = cdata.into_inner();
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes
            Ok(_) => {}
            Err(e) => {
                return Err(TagDiffError::load(
                    format!("at byte offset {}", reader.buffer_position()),
                    LoadErrorKind::InvalidXml(e.to_string()),
                ));
            }
        }
    }

    if !stack.is_empty() {
        return Err(invalid_xml("unclosed element at end of input"));
    }
    root.ok_or_else(|| {
        TagDiffError::load("parsing document", LoadErrorKind::NoRootElement)
    })
}

/// Build an element from a start (or empty) tag, decoding its attributes.
fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            TagDiffError::load(
                format!("in element <{}>", element.tag),
                LoadErrorKind::InvalidAttribute(e.to_string()),
            )
        })?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| {
                TagDiffError::load(
                    format!("in element <{}>", element.tag),
                    LoadErrorKind::InvalidAttribute(e.to_string()),
                )
            })?
            .into_owned();
        element.attributes.insert(name, value);
    }

    Ok(element)
}

/// Hand a completed element to its parent, or install it as the root.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, elem: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(elem),
        None => *root = Some(elem),
    }
}

fn invalid_xml(message: impl Into<String>) -> TagDiffError {
    TagDiffError::load("parsing document", LoadErrorKind::InvalidXml(message.into()))
}

/// Re-wrap a parse error so the failing file is named in the context.
fn attach_path_context(err: TagDiffError, path: &Path) -> TagDiffError {
    match err {
        TagDiffError::Load { context, source } => TagDiffError::Load {
            context: format!("{} ({})", context, path.display()),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let root = parse_document_str(r#"<item id="1">A</item>"#).expect("parse failed");
        assert_eq!(root.tag, "item");
        assert_eq!(root.attributes.get("id").map(String::as_str), Some("1"));
        assert_eq!(root.text, "A");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_parse_nested_children_in_order() {
        let root = parse_document_str(
            "<list><item>first</item><item>second</item><other/></list>",
        )
        .expect("parse failed");
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.children[0].text, "first");
        assert_eq!(root.children[1].text, "second");
        assert_eq!(root.children[2].tag, "other");
    }

    #[test]
    fn test_parse_self_closing_is_empty() {
        let root = parse_document_str("<extra/>").expect("parse failed");
        assert!(root.is_empty());
    }

    #[test]
    fn test_parse_entity_unescaping() {
        let root = parse_document_str(r#"<a note="x &amp; y">1 &lt; 2</a>"#).expect("parse failed");
        assert_eq!(root.attributes.get("note").map(String::as_str), Some("x & y"));
        assert_eq!(root.text, "1 < 2");
    }

    #[test]
    fn test_parse_whitespace_only_text_dropped() {
        let root = parse_document_str("<a>\n  <b>v</b>\n</a>").expect("parse failed");
        assert_eq!(root.text, "");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let err = parse_document_str("").expect_err("should fail");
        assert!(matches!(
            err,
            TagDiffError::Load {
                source: LoadErrorKind::NoRootElement,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        assert!(parse_document_str("<a><b></a>").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("definitely/not/here.xml")).expect_err("should fail");
        assert!(matches!(
            err,
            TagDiffError::Load {
                source: LoadErrorKind::FileNotFound(_),
                ..
            }
        ));
    }
}

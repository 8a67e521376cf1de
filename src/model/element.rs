//! In-memory element tree.
//!
//! The loader produces one [`Document`] per input file. Elements own their
//! children outright, so a tree is acyclic by construction and never shares
//! nodes with another document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single XML element: tag name, attributes, text content, children.
///
/// Attributes keep parse order (useful for debug dumps) but are compared
/// order-independently. Text is the concatenation of all character data
/// directly inside the element; normalization happens at comparison time,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, as written in the source (namespace prefixes included)
    pub tag: String,
    /// Attribute name -> value, in document order
    pub attributes: IndexMap<String, String>,
    /// Character data directly inside this element (possibly empty)
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// True if the element has no attributes, no text, and no children.
    ///
    /// A self-closing `<extra/>` parses to exactly this shape.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.text.is_empty() && self.children.is_empty()
    }

    /// Total number of elements in this subtree, including self.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_size).sum::<usize>()
    }
}

/// A parsed XML document: the root element plus its source path.
///
/// The source path is carried for report titles and output file naming only;
/// the comparison core never touches the filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Root element of the tree
    pub root: Element,
    /// Path the document was loaded from
    pub source: PathBuf,
}

impl Document {
    /// Create a document from a root element and its origin.
    pub fn new(root: Element, source: impl Into<PathBuf>) -> Self {
        Self {
            root,
            source: source.into(),
        }
    }

    /// File stem of the source path ("data/loan_a.xml" -> "loan_a").
    #[must_use]
    pub fn source_stem(&self) -> String {
        self.source
            .file_stem()
            .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned())
    }
}

//! Tag indexing: grouping every element of a document by tag name.
//!
//! The index is built once per document with a depth-first pre-order walk
//! and never mutated afterward. Group order follows first occurrence in the
//! document; order inside a group is document order, which later passes use
//! as the tie-break for matching.

use crate::error::{Result, TagDiffError};
use crate::model::{Document, Element};
use indexmap::IndexMap;

/// An element together with its location in the document.
///
/// The path is XPath-like (`/MESSAGE/DEAL/ASSET[1]`); `[i]` indices appear
/// only where two or more siblings share a tag name.
#[derive(Debug, Clone, Copy)]
pub struct IndexedElement<'a> {
    /// Location of the element within its document
    pub path: &'a str,
    /// The element itself
    pub element: &'a Element,
}

/// Owned (path, element) pair collected during the walk.
#[derive(Debug)]
struct IndexEntry<'a> {
    path: String,
    element: &'a Element,
}

/// All elements of one document, grouped by tag name.
#[derive(Debug)]
pub struct TagIndex<'a> {
    groups: IndexMap<String, Vec<IndexEntry<'a>>>,
}

impl<'a> TagIndex<'a> {
    /// Build the index for a document.
    ///
    /// Every element, the root included, lands in exactly one group. Fails
    /// with [`TagDiffError::MalformedTree`] if an element has an empty tag
    /// name, identifying it by the path of its parent.
    pub fn build(document: &'a Document) -> Result<Self> {
        let mut groups: IndexMap<String, Vec<IndexEntry<'a>>> = IndexMap::new();
        let root = &document.root;
        if root.tag.trim().is_empty() {
            return Err(TagDiffError::malformed_tree("/", "element has an empty tag name"));
        }
        let root_path = format!("/{}", root.tag);
        index_subtree(root, root_path, &mut groups)?;
        Ok(Self { groups })
    }

    /// Elements for a tag, in document order. `None` if the tag is absent.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Vec<IndexedElement<'_>>> {
        self.groups.get(tag).map(|entries| {
            entries
                .iter()
                .map(|e| IndexedElement {
                    path: &e.path,
                    element: e.element,
                })
                .collect()
        })
    }

    /// Tag names in first-occurrence document order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Whether the document contains any element with this tag.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.groups.contains_key(tag)
    }

    /// Number of distinct tag names.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of indexed elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of occurrences of a tag (0 if absent).
    #[must_use]
    pub fn occurrences(&self, tag: &str) -> usize {
        self.groups.get(tag).map_or(0, Vec::len)
    }

    /// Path of the first occurrence of a tag, if present.
    #[must_use]
    pub fn first_path(&self, tag: &str) -> Option<&str> {
        self.groups
            .get(tag)
            .and_then(|entries| entries.first())
            .map(|e| e.path.as_str())
    }
}

/// Record `element` under its tag, then recurse into its children.
fn index_subtree<'a>(
    element: &'a Element,
    path: String,
    groups: &mut IndexMap<String, Vec<IndexEntry<'a>>>,
) -> Result<()> {
    // Sibling indices are only disambiguating when a tag repeats, so count
    // occurrences up front and suffix [i] for repeated tags only.
    let mut tag_totals: IndexMap<&str, usize> = IndexMap::new();
    for child in &element.children {
        *tag_totals.entry(child.tag.as_str()).or_insert(0) += 1;
    }

    let parent_path = path.clone();
    groups
        .entry(element.tag.clone())
        .or_default()
        .push(IndexEntry { path, element });

    let mut tag_seen: IndexMap<&str, usize> = IndexMap::new();
    for child in &element.children {
        if child.tag.trim().is_empty() {
            return Err(TagDiffError::malformed_tree(
                parent_path,
                "child element has an empty tag name",
            ));
        }
        let seen = tag_seen.entry(child.tag.as_str()).or_insert(0);
        let child_path = if tag_totals.get(child.tag.as_str()).copied().unwrap_or(0) > 1 {
            format!("{parent_path}/{}[{seen}]", child.tag)
        } else {
            format!("{parent_path}/{}", child.tag)
        };
        *seen += 1;
        index_subtree(child, child_path, groups)?;
    }
    Ok(())
}

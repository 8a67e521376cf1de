//! Comparison engine: index both documents, match tag by tag, build the
//! report.

use super::matcher::match_tag;
use super::result::{Report, TagReport};
use super::score::ScoreWeights;
use crate::error::Result;
use crate::index::TagIndex;
use crate::model::Document;

/// Tag-scoped comparison engine for XML documents.
pub struct CompareEngine {
    weights: ScoreWeights,
}

impl CompareEngine {
    /// Create an engine with default score weights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Override the score weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current score weights.
    #[must_use]
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Compare a primary document against a basis document.
    ///
    /// Tags are processed in primary first-occurrence order; tags present
    /// only in the basis follow, in basis first-occurrence order. Either a
    /// complete report is produced or an error; nothing partial.
    pub fn compare(&self, primary: &Document, basis: &Document) -> Result<Report> {
        let primary_index = TagIndex::build(primary)?;
        let basis_index = TagIndex::build(basis)?;

        tracing::debug!(
            "Indexed {} primary elements across {} tags, {} basis elements across {} tags",
            primary_index.element_count(),
            primary_index.tag_count(),
            basis_index.element_count(),
            basis_index.tag_count()
        );

        let mut tag_order: Vec<String> = primary_index.tags().map(str::to_string).collect();
        for tag in basis_index.tags() {
            if !primary_index.contains_tag(tag) {
                tag_order.push(tag.to_string());
            }
        }

        let mut tags = Vec::with_capacity(tag_order.len());
        for tag in tag_order {
            let primary_group = primary_index.get(&tag).unwrap_or_default();
            let basis_group = basis_index.get(&tag).unwrap_or_default();
            tracing::debug!(
                "Comparing tag <{}>: {} primary vs {} basis occurrence(s)",
                tag,
                primary_group.len(),
                basis_group.len()
            );
            let outcomes = match_tag(&primary_group, &basis_group, &self.weights);
            tags.push(TagReport { tag, outcomes });
        }

        Ok(Report::from_tags(
            primary.source.display().to_string(),
            basis.source.display().to_string(),
            tags,
        ))
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new()
    }
}

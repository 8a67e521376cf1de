//! Comparison result structures.
//!
//! Everything here is immutable once produced and serializable, so logging
//! and rendering collaborators can consume a [`Report`] without reaching
//! back into the engine.

use serde::{Deserialize, Serialize};

/// One attribute (name, value) present on only one side of a pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,
    pub value: String,
}

/// An attribute present on both sides with differing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDiff {
    pub name: String,
    pub primary: String,
    pub basis: String,
}

/// Text content that differs after normalization.
///
/// The raw (pre-normalization) strings are kept so reports can show what
/// was actually in each file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    pub primary: String,
    pub basis: String,
}

/// One-level summary of how the children of a best-match pairing lined up.
///
/// Reports stay bounded by summarizing child differences as counts instead
/// of recursing into nested detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSummary {
    pub exact: usize,
    pub best_match: usize,
    pub primary_only: usize,
    pub basis_only: usize,
}

impl ChildSummary {
    /// True if every child found an exact counterpart.
    #[must_use]
    pub fn all_exact(&self) -> bool {
        self.best_match == 0 && self.primary_only == 0 && self.basis_only == 0
    }
}

/// Attribute-, text-, and child-level discrepancies for a best-match pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffDetail {
    /// Attributes present on the primary element only
    pub attributes_only_in_primary: Vec<AttributeEntry>,
    /// Attributes present on the basis element only
    pub attributes_only_in_basis: Vec<AttributeEntry>,
    /// Attributes present on both sides with different values
    pub differing_attributes: Vec<AttributeDiff>,
    /// Text difference, when normalized texts are unequal
    pub text: Option<TextDiff>,
    /// Child-level outcome counts
    pub children: ChildSummary,
}

impl DiffDetail {
    /// Total number of attribute-level discrepancies.
    #[must_use]
    pub fn attribute_diff_count(&self) -> usize {
        self.attributes_only_in_primary.len()
            + self.attributes_only_in_basis.len()
            + self.differing_attributes.len()
    }

    /// True if the detail records no discrepancy at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attribute_diff_count() == 0 && self.text.is_none() && self.children.all_exact()
    }
}

/// Outcome of pairing one element (or failing to).
///
/// Elements are identified by their document paths; the outcome owns its
/// strings so a [`Report`] stays valid after the documents are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The primary element has an identical counterpart in the basis
    Exact { primary: String, basis: String },
    /// No identical counterpart; paired with the least-dissimilar candidate
    BestMatch {
        primary: String,
        basis: String,
        score: f64,
        detail: DiffDetail,
    },
    /// The element's tag occurs in the basis, but this element went unpaired
    PrimaryOnly { primary: String },
    /// A basis element no primary element was paired with
    BasisOnly { basis: String },
}

impl MatchOutcome {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact { .. })
    }

    #[must_use]
    pub fn is_best_match(&self) -> bool {
        matches!(self, Self::BestMatch { .. })
    }

    /// Path of the primary element, when one is involved.
    #[must_use]
    pub fn primary_path(&self) -> Option<&str> {
        match self {
            Self::Exact { primary, .. }
            | Self::BestMatch { primary, .. }
            | Self::PrimaryOnly { primary } => Some(primary),
            Self::BasisOnly { .. } => None,
        }
    }

    /// Path of the basis element, when one is involved.
    #[must_use]
    pub fn basis_path(&self) -> Option<&str> {
        match self {
            Self::Exact { basis, .. }
            | Self::BestMatch { basis, .. }
            | Self::BasisOnly { basis } => Some(basis),
            Self::PrimaryOnly { .. } => None,
        }
    }
}

/// All outcomes for one tag name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagReport {
    /// The tag these outcomes belong to
    pub tag: String,
    /// Outcomes in primary document order, basis-only leftovers last
    pub outcomes: Vec<MatchOutcome>,
}

impl TagReport {
    /// True if the tag occurs in only one of the two documents.
    ///
    /// These are the rows of the symmetric-difference table.
    #[must_use]
    pub fn is_one_sided(&self) -> bool {
        let any_primary = self.outcomes.iter().any(|o| o.primary_path().is_some());
        let any_basis = self.outcomes.iter().any(|o| o.basis_path().is_some());
        any_primary != any_basis
    }
}

/// Summary counts over every outcome in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub tags_compared: usize,
    pub exact: usize,
    pub best_match: usize,
    pub primary_only: usize,
    pub basis_only: usize,
}

/// Complete result of comparing a primary document against a basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Report {
    /// Source path of the primary document
    pub primary_source: String,
    /// Source path of the basis document
    pub basis_source: String,
    /// Per-tag outcomes, in tag processing order
    pub tags: Vec<TagReport>,
    /// Summary counts
    pub summary: ReportSummary,
}

impl Report {
    /// Assemble a report from per-tag outcomes, computing summary counts in
    /// a single scan. Pure aggregation; no comparison logic.
    pub fn from_tags(
        primary_source: impl Into<String>,
        basis_source: impl Into<String>,
        tags: Vec<TagReport>,
    ) -> Self {
        let mut summary = ReportSummary {
            tags_compared: tags.len(),
            ..ReportSummary::default()
        };
        for tag in &tags {
            for outcome in &tag.outcomes {
                match outcome {
                    MatchOutcome::Exact { .. } => summary.exact += 1,
                    MatchOutcome::BestMatch { .. } => summary.best_match += 1,
                    MatchOutcome::PrimaryOnly { .. } => summary.primary_only += 1,
                    MatchOutcome::BasisOnly { .. } => summary.basis_only += 1,
                }
            }
        }
        Self {
            primary_source: primary_source.into(),
            basis_source: basis_source.into(),
            tags,
            summary,
        }
    }

    /// True if anything other than exact matches was recorded.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        self.summary.best_match > 0 || self.summary.primary_only > 0 || self.summary.basis_only > 0
    }

    /// Tags present in only one document, for the symmetric-difference table.
    pub fn one_sided_tags(&self) -> impl Iterator<Item = &TagReport> {
        self.tags.iter().filter(|t| t.is_one_sided())
    }
}

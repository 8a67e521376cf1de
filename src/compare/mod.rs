//! Tag-scoped semantic comparison of XML documents.
//!
//! The comparison runs in three layers:
//!
//! - [`score`]: element exactness, dissimilarity scoring, and diff detail
//! - [`matcher`]: per-tag pairing (exact pass, best-match pass, leftovers)
//! - [`engine`]: whole-document orchestration producing a [`Report`]
//!
//! Everything in this module is pure: no I/O, no shared mutable state, and
//! identical inputs always produce identical reports.

mod engine;
mod matcher;
mod result;
mod score;

pub use engine::CompareEngine;
pub use matcher::match_tag;
pub use result::{
    AttributeDiff, AttributeEntry, ChildSummary, DiffDetail, MatchOutcome, Report, ReportSummary,
    TagReport, TextDiff,
};
pub use score::{
    compare_elements, elements_exact, normalize_text, score_elements, ElementComparison,
    ScoreWeights,
};

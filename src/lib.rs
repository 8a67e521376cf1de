//! **Tag-scoped semantic comparison of XML documents.**
//!
//! `tagdiff` compares a *primary* XML document against a *basis*
//! (ground-truth) document, tag by tag, and reports which elements match
//! exactly, which pair up with a nearest candidate and how they differ,
//! and which tags exist in only one of the two documents.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the owned [`Element`](model::Element) tree the loader
//!   produces and everything else consumes.
//! - **[`loader`]**: parses an XML file into a [`Document`](model::Document).
//! - **[`index`]**: groups every element of a document by tag name,
//!   preserving document order, and records element paths for reporting.
//! - **[`compare`]**: the comparison core. The
//!   [`CompareEngine`](compare::CompareEngine) matches each tag's primary
//!   elements against its basis elements (exact pass first, then
//!   best-match scoring) and assembles a serializable
//!   [`Report`](compare::Report).
//! - **[`reports`]**: text-table, HTML, and JSON renderings of a report.
//! - **[`pipeline`]**: load → compare → write orchestration and CLI exit
//!   codes.
//!
//! ## Getting Started: Comparing Two Documents
//!
//! ```no_run
//! use std::path::Path;
//! use tagdiff::{load_document, CompareEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let primary = load_document(Path::new("primary.xml"))?;
//!     let basis = load_document(Path::new("basis.xml"))?;
//!
//!     let engine = CompareEngine::new();
//!     let report = engine.compare(&primary, &basis)?;
//!
//!     println!(
//!         "{} exact, {} best match, {} primary only, {} basis only",
//!         report.summary.exact,
//!         report.summary.best_match,
//!         report.summary.primary_only,
//!         report.summary.basis_only
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `tagdiff` library crate. The `tagdiff`
//! binary wraps it with argument parsing, a log file, and report-file
//! writing; see the project's README.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use compare::{
    CompareEngine, DiffDetail, MatchOutcome, Report, ReportSummary, ScoreWeights, TagReport,
};
pub use config::{BehaviorConfig, CompareConfig, ComparePaths, OutputConfig};
pub use error::{Result, TagDiffError};
pub use index::TagIndex;
pub use loader::{load_document, parse_document_str};
pub use model::{Document, Element};
pub use reports::{HtmlReporter, JsonReporter, ReportFormat, ReportGenerator, TextReporter};

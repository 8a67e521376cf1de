//! Report generation for comparison results.
//!
//! This module provides the output formats for a [`Report`]:
//! - Text: bordered result tables for the console, the log, and the `.rpt`
//!   file
//! - HTML: standalone pages, one per analyzed tag plus a symmetric-
//!   difference page
//! - JSON: structured data for programmatic integration
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Attribute values and text content come from external XML files and are
//! escaped before being embedded in HTML reports.

pub mod escape;
mod html;
mod json;
mod table;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use table::TextReporter;

use crate::compare::Report;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Bordered text tables
    Text,
    /// Standalone HTML pages
    Html,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from comparison results
    fn generate(&self, report: &Report) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

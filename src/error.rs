//! Unified error types for tagdiff.
//!
//! The comparison core performs no I/O, so most failures originate in the
//! loader (file access, XML syntax) or in report writing. Tree-shape
//! violations surface as [`TagDiffError::MalformedTree`] with the offending
//! element identified by path.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TagDiffError {
    /// Errors while loading an XML document
    #[error("Failed to load XML: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// An element tree violated the indexer's invariants
    #[error("Malformed element tree at {path}: {reason}")]
    MalformedTree { path: String, reason: String },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("XML source file {0:?} was not found")]
    FileNotFound(PathBuf),

    #[error("Invalid XML syntax: {0}")]
    InvalidXml(String),

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Attribute error: {0}")]
    InvalidAttribute(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),
}

/// Convenient Result type for tagdiff operations
pub type Result<T> = std::result::Result<T, TagDiffError>;

impl TagDiffError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a malformed-tree error for the element at `path`
    pub fn malformed_tree(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTree {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for TagDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TagDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

//! JSON report generator.
//!
//! The [`Report`] is serializable as-is; this reporter is a thin wrapper
//! that pretty-prints it for machine consumption.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compare::Report;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::CompareEngine;
    use crate::loader::parse_document_str;
    use crate::model::Document;

    #[test]
    fn test_json_report_parses_back() {
        let p = Document::new(
            parse_document_str(r#"<r><item id="1">A</item></r>"#).expect("parse"),
            "p.xml",
        );
        let b = Document::new(
            parse_document_str(r#"<r><item id="1">B</item></r>"#).expect("parse"),
            "b.xml",
        );
        let report = CompareEngine::new().compare(&p, &b).expect("compare");

        let json = JsonReporter::new().generate(&report).expect("generate");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["summary"]["best_match"], 1);
        assert_eq!(value["primary_source"], "p.xml");
    }
}

//! Text report generator: bordered result tables for the log, the console,
//! and the `.rpt` file.
//!
//! Three tables per report, mirroring the tool's output contract: per-tag
//! comparison matches, per-tag closest-match detail, and the document-level
//! symmetric-difference table.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compare::{DiffDetail, MatchOutcome, Report, TagReport};

/// Placeholder for a value that does not exist on one side.
const NO_ENTRY: &str = "--";
/// Marker for a field whose values differ between the documents.
const DOES_NOT_MATCH: &str = "X";

/// Column alignment for [`TextTable`].
#[derive(Debug, Clone, Copy)]
enum Alignment {
    Left,
    Center,
}

/// Minimal bordered table renderer (`+---+` style).
struct TextTable {
    columns: Vec<(String, Alignment)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(columns: &[(&str, Alignment)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(name, align)| ((*name).to_string(), *align))
                .collect(),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|(name, _)| name.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&"-".repeat(width + 2));
                line.push('+');
            }
            line
        };

        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        out.push_str(&self.format_row(
            &self
                .columns
                .iter()
                .map(|(name, _)| name.clone())
                .collect::<Vec<_>>(),
            &widths,
            true,
        ));
        out.push_str(&border);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&self.format_row(row, &widths, false));
        }
        out.push_str(&border);
        out
    }

    fn format_row(&self, cells: &[String], widths: &[usize], header: bool) -> String {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            let width = widths[i];
            let pad = width.saturating_sub(cell.chars().count());
            let aligned = if header || matches!(self.columns[i].1, Alignment::Center) {
                let left = pad / 2;
                format!(
                    "{}{}{}",
                    " ".repeat(left),
                    cell,
                    " ".repeat(pad - left)
                )
            } else {
                format!("{}{}", cell, " ".repeat(pad))
            };
            line.push(' ');
            line.push_str(&aligned);
            line.push_str(" |");
        }
        line.push('\n');
        line
    }
}

/// Text report generator.
///
/// With `detailed` off, the per-attribute closest-match tables are omitted;
/// the `.rpt` file always uses the detailed form, the console copy follows
/// the debug toggle.
pub struct TextReporter {
    detailed: bool,
}

impl TextReporter {
    /// Create a reporter producing the full detailed output.
    #[must_use]
    pub const fn new() -> Self {
        Self { detailed: true }
    }

    /// Control whether closest-match detail tables are included.
    #[must_use]
    pub const fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    fn summary_section(report: &Report) -> String {
        let mut lines = Vec::new();
        lines.push("Tag Comparison Report".to_string());
        lines.push("=".repeat(60));
        lines.push(format!("Primary: {}", report.primary_source));
        lines.push(format!("Basis:   {}", report.basis_source));
        lines.push(format!(
            "Tags compared: {} | Exact: {} | Best match: {} | Primary only: {} | Basis only: {}",
            report.summary.tags_compared,
            report.summary.exact,
            report.summary.best_match,
            report.summary.primary_only,
            report.summary.basis_only
        ));
        lines.join("\n")
    }

    fn matches_table(tag_report: &TagReport) -> String {
        let mut table = TextTable::new(&[
            ("Primary Path", Alignment::Left),
            ("Exact Match", Alignment::Left),
            ("Closest Match", Alignment::Left),
        ]);

        for outcome in &tag_report.outcomes {
            let row = match outcome {
                MatchOutcome::Exact { primary, basis } => {
                    vec![primary.clone(), basis.clone(), String::new()]
                }
                MatchOutcome::BestMatch {
                    primary,
                    basis,
                    score,
                    detail,
                } => vec![
                    primary.clone(),
                    NO_ENTRY.to_string(),
                    format!(
                        "{} (score {:.2}; {} diff{})",
                        basis,
                        score,
                        diff_count(detail),
                        if diff_count(detail) == 1 { "" } else { "s" }
                    ),
                ],
                MatchOutcome::PrimaryOnly { primary } => {
                    vec![primary.clone(), NO_ENTRY.to_string(), NO_ENTRY.to_string()]
                }
                MatchOutcome::BasisOnly { basis } => vec![
                    NO_ENTRY.to_string(),
                    NO_ENTRY.to_string(),
                    format!("{basis} (basis only)"),
                ],
            };
            table.add_row(row);
        }

        format!(
            "*** Comparison Matches for <{}> ***\n{}",
            tag_report.tag,
            table.render()
        )
    }

    fn closest_match_table(tag_report: &TagReport) -> Option<String> {
        let best_matches: Vec<_> = tag_report
            .outcomes
            .iter()
            .filter_map(|o| match o {
                MatchOutcome::BestMatch {
                    primary,
                    basis,
                    detail,
                    ..
                } => Some((primary, basis, detail)),
                _ => None,
            })
            .collect();
        if best_matches.is_empty() {
            return None;
        }

        let mut table = TextTable::new(&[
            ("Primary Path", Alignment::Left),
            ("Closest Match", Alignment::Left),
            ("Field", Alignment::Left),
            ("Diff?", Alignment::Center),
            ("Primary Value", Alignment::Left),
            ("Basis Value", Alignment::Left),
        ]);

        let blank = || {
            vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]
        };

        for (primary, basis, detail) in best_matches {
            let mut header = blank();
            header[0] = primary.clone();
            header[1] = basis.clone();
            table.add_row(header);

            for diff in &detail.differing_attributes {
                let mut row = blank();
                row[2] = diff.name.clone();
                row[3] = DOES_NOT_MATCH.to_string();
                row[4] = diff.primary.clone();
                row[5] = diff.basis.clone();
                table.add_row(row);
            }
            for entry in &detail.attributes_only_in_primary {
                let mut row = blank();
                row[2] = entry.name.clone();
                row[3] = DOES_NOT_MATCH.to_string();
                row[4] = entry.value.clone();
                row[5] = NO_ENTRY.to_string();
                table.add_row(row);
            }
            for entry in &detail.attributes_only_in_basis {
                let mut row = blank();
                row[2] = entry.name.clone();
                row[3] = DOES_NOT_MATCH.to_string();
                row[4] = NO_ENTRY.to_string();
                row[5] = entry.value.clone();
                table.add_row(row);
            }
            if let Some(text) = &detail.text {
                let mut row = blank();
                row[2] = "(text)".to_string();
                row[3] = DOES_NOT_MATCH.to_string();
                row[4] = if text.primary.is_empty() {
                    NO_ENTRY.to_string()
                } else {
                    text.primary.clone()
                };
                row[5] = if text.basis.is_empty() {
                    NO_ENTRY.to_string()
                } else {
                    text.basis.clone()
                };
                table.add_row(row);
            }
            if !detail.children.all_exact() {
                let mut row = blank();
                row[2] = "(children)".to_string();
                row[4] = child_summary_cell(detail);
                table.add_row(row);
            }
            table.add_row(blank());
        }

        Some(format!(
            "Closest Element Match for <{}>:\n{}",
            tag_report.tag,
            table.render()
        ))
    }

    fn symmetric_diff_table(report: &Report) -> String {
        let mut table = TextTable::new(&[
            ("Source", Alignment::Center),
            ("Tag", Alignment::Center),
            ("Occurrences", Alignment::Center),
            ("Path", Alignment::Left),
        ]);

        let mut one_sided: Vec<_> = report.one_sided_tags().collect();
        one_sided.sort_by(|a, b| a.tag.cmp(&b.tag));

        for tag_report in one_sided {
            let primary_side = tag_report
                .outcomes
                .iter()
                .any(|o| o.primary_path().is_some());
            let source = if primary_side { "PRIMARY" } else { "BASIS" };
            let path = tag_report
                .outcomes
                .first()
                .and_then(|o| o.primary_path().or_else(|| o.basis_path()))
                .unwrap_or(NO_ENTRY);
            table.add_row(vec![
                source.to_string(),
                tag_report.tag.clone(),
                tag_report.outcomes.len().to_string(),
                path.to_string(),
            ]);
        }

        format!("ELEMENT DIFFERENCES:\n{}", table.render())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut sections = Vec::new();
        sections.push(Self::summary_section(report));

        for tag_report in &report.tags {
            sections.push(Self::matches_table(tag_report));
            if self.detailed {
                if let Some(detail) = Self::closest_match_table(tag_report) {
                    sections.push(detail);
                }
            }
        }

        sections.push(Self::symmetric_diff_table(report));
        Ok(sections.join("\n\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

/// Total number of discrepancies recorded in a detail.
fn diff_count(detail: &DiffDetail) -> usize {
    detail.attribute_diff_count()
        + usize::from(detail.text.is_some())
        + detail.children.best_match
        + detail.children.primary_only
        + detail.children.basis_only
}

fn child_summary_cell(detail: &DiffDetail) -> String {
    let c = detail.children;
    format!(
        "{} exact, {} best match, {} primary only, {} basis only",
        c.exact, c.best_match, c.primary_only, c.basis_only
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::CompareEngine;
    use crate::loader::parse_document_str;
    use crate::model::Document;

    fn report_for(primary: &str, basis: &str) -> Report {
        let p = Document::new(parse_document_str(primary).expect("parse"), "p.xml");
        let b = Document::new(parse_document_str(basis).expect("parse"), "b.xml");
        CompareEngine::new().compare(&p, &b).expect("compare")
    }

    #[test]
    fn test_text_report_contains_all_tables() {
        let report = report_for(
            r#"<r><item id="1">A</item><only/></r>"#,
            r#"<r><item id="1">B</item><extra/></r>"#,
        );
        let text = TextReporter::new().generate(&report).expect("generate");

        assert!(text.contains("Comparison Matches for <item>"));
        assert!(text.contains("Closest Element Match for <item>"));
        assert!(text.contains("ELEMENT DIFFERENCES:"));
        assert!(text.contains("PRIMARY"));
        assert!(text.contains("BASIS"));
    }

    #[test]
    fn test_non_detailed_omits_closest_match_tables() {
        let report = report_for(
            r#"<r><item id="1">A</item></r>"#,
            r#"<r><item id="1">B</item></r>"#,
        );
        let text = TextReporter::new()
            .detailed(false)
            .generate(&report)
            .expect("generate");
        assert!(text.contains("Comparison Matches for <item>"));
        assert!(!text.contains("Closest Element Match"));
    }

    #[test]
    fn test_text_diff_values_rendered() {
        let report = report_for("<r><item>A</item></r>", "<r><item>B</item></r>");
        let text = TextReporter::new().generate(&report).expect("generate");
        assert!(text.contains("(text)"));
        assert!(text.contains("| A"));
        assert!(text.contains("| B"));
    }

    #[test]
    fn test_table_borders_align() {
        let report = report_for("<r><a>x</a></r>", "<r><a>x</a></r>");
        let text = TextReporter::new().generate(&report).expect("generate");
        let border_lines: Vec<_> = text.lines().filter(|l| l.starts_with('+')).collect();
        assert!(!border_lines.is_empty());
        for line in &border_lines {
            assert!(line.ends_with('+'), "unterminated border: {line}");
        }
    }
}

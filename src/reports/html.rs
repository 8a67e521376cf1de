//! HTML report generator.
//!
//! Produces a standalone page per analyzed tag (the `--html` output files)
//! as well as a combined single-page report. All document-derived strings
//! are escaped before embedding.

use super::escape::escape_html;
use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compare::{DiffDetail, MatchOutcome, Report, TagReport};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    fn get_styles() -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --success-color: #a6e3a1;
                --warning-color: #f9e2af;
                --error-color: #f38ba8;
                --border-color: #45475a;
                --card-bg: #313244;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1, h2, h3 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
            }

            .card-title {
                font-size: 0.9em;
                color: #a6adc8;
                margin-bottom: 10px;
            }

            .card-value {
                font-size: 2em;
                font-weight: bold;
            }

            .card-value.exact { color: var(--success-color); }
            .card-value.best { color: var(--warning-color); }
            .card-value.one-sided { color: var(--error-color); }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: var(--card-bg);
                border-radius: 8px;
                overflow: hidden;
            }

            th, td {
                padding: 10px 14px;
                text-align: left;
                border-bottom: 1px solid var(--border-color);
            }

            th {
                background-color: #45475a;
                font-weight: 600;
            }

            tr:hover {
                background-color: #3b3d4d;
            }

            .badge {
                display: inline-block;
                padding: 2px 8px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 500;
            }

            .badge-exact { background-color: rgba(166, 227, 161, 0.2); color: var(--success-color); }
            .badge-best { background-color: rgba(249, 226, 175, 0.2); color: var(--warning-color); }
            .badge-primary-only { background-color: rgba(243, 139, 168, 0.2); color: var(--error-color); }
            .badge-basis-only { background-color: rgba(137, 180, 250, 0.2); color: var(--accent-color); }

            .path { font-family: monospace; font-size: 0.9em; }

            .section {
                margin-bottom: 40px;
            }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }

    fn page_header(&self, html: &mut String, title: &str, report: &Report) -> Result<(), ReportError> {
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "<meta charset=\"utf-8\">")?;
        writeln!(html, "<title>{}</title>", escape_html(title))?;
        if self.include_styles {
            html.push_str(Self::get_styles());
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "<h1>{}</h1>", escape_html(title))?;
        writeln!(
            html,
            "<p class=\"path\">{} vs {}</p>",
            escape_html(&report.primary_source),
            escape_html(&report.basis_source)
        )?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn page_footer(html: &mut String) -> Result<(), ReportError> {
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "<p>Generated by tagdiff v{}</p>",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;
        Ok(())
    }

    fn summary_cards(html: &mut String, report: &Report) -> Result<(), ReportError> {
        writeln!(html, "<div class=\"summary-cards\">")?;
        let cards = [
            ("Tags Compared", report.summary.tags_compared, ""),
            ("Exact", report.summary.exact, "exact"),
            ("Best Match", report.summary.best_match, "best"),
            ("Primary Only", report.summary.primary_only, "one-sided"),
            ("Basis Only", report.summary.basis_only, "one-sided"),
        ];
        for (title, value, class) in cards {
            writeln!(html, "<div class=\"card\">")?;
            writeln!(html, "<div class=\"card-title\">{title}</div>")?;
            writeln!(html, "<div class=\"card-value {class}\">{value}</div>")?;
            writeln!(html, "</div>")?;
        }
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn tag_section(html: &mut String, tag_report: &TagReport) -> Result<(), ReportError> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "<h2>&lt;{}&gt;</h2>", escape_html(&tag_report.tag))?;
        writeln!(html, "<table>")?;
        writeln!(
            html,
            "<tr><th>Outcome</th><th>Primary Path</th><th>Basis Path</th><th>Score</th></tr>"
        )?;
        for outcome in &tag_report.outcomes {
            let (badge_class, badge_text) = match outcome {
                MatchOutcome::Exact { .. } => ("badge-exact", "Exact"),
                MatchOutcome::BestMatch { .. } => ("badge-best", "Best match"),
                MatchOutcome::PrimaryOnly { .. } => ("badge-primary-only", "Primary only"),
                MatchOutcome::BasisOnly { .. } => ("badge-basis-only", "Basis only"),
            };
            let primary = outcome.primary_path().unwrap_or("&mdash;");
            let basis = outcome.basis_path().unwrap_or("&mdash;");
            let score = match outcome {
                MatchOutcome::BestMatch { score, .. } => format!("{score:.2}"),
                _ => String::new(),
            };
            writeln!(
                html,
                "<tr><td><span class=\"badge {}\">{}</span></td><td class=\"path\">{}</td><td class=\"path\">{}</td><td>{}</td></tr>",
                badge_class,
                badge_text,
                if primary == "&mdash;" { primary.to_string() } else { escape_html(primary) },
                if basis == "&mdash;" { basis.to_string() } else { escape_html(basis) },
                score
            )?;
        }
        writeln!(html, "</table>")?;

        for outcome in &tag_report.outcomes {
            if let MatchOutcome::BestMatch {
                primary,
                basis,
                detail,
                ..
            } = outcome
            {
                Self::detail_table(html, primary, basis, detail)?;
            }
        }

        writeln!(html, "</div>")?;
        Ok(())
    }

    fn detail_table(
        html: &mut String,
        primary: &str,
        basis: &str,
        detail: &DiffDetail,
    ) -> Result<(), ReportError> {
        writeln!(
            html,
            "<h3 class=\"path\">{} &harr; {}</h3>",
            escape_html(primary),
            escape_html(basis)
        )?;
        writeln!(html, "<table>")?;
        writeln!(
            html,
            "<tr><th>Field</th><th>Primary Value</th><th>Basis Value</th></tr>"
        )?;
        for diff in &detail.differing_attributes {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&diff.name),
                escape_html(&diff.primary),
                escape_html(&diff.basis)
            )?;
        }
        for entry in &detail.attributes_only_in_primary {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>&mdash;</td></tr>",
                escape_html(&entry.name),
                escape_html(&entry.value)
            )?;
        }
        for entry in &detail.attributes_only_in_basis {
            writeln!(
                html,
                "<tr><td>{}</td><td>&mdash;</td><td>{}</td></tr>",
                escape_html(&entry.name),
                escape_html(&entry.value)
            )?;
        }
        if let Some(text) = &detail.text {
            writeln!(
                html,
                "<tr><td>(text)</td><td>{}</td><td>{}</td></tr>",
                escape_html(&text.primary),
                escape_html(&text.basis)
            )?;
        }
        if !detail.children.all_exact() {
            let c = detail.children;
            writeln!(
                html,
                "<tr><td>(children)</td><td colspan=\"2\">{} exact, {} best match, {} primary only, {} basis only</td></tr>",
                c.exact, c.best_match, c.primary_only, c.basis_only
            )?;
        }
        writeln!(html, "</table>")?;
        Ok(())
    }

    fn symmetric_diff_section(html: &mut String, report: &Report) -> Result<(), ReportError> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "<h2>Symmetric Differences</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(
            html,
            "<tr><th>Source</th><th>Tag</th><th>Occurrences</th><th>Path</th></tr>"
        )?;
        let mut one_sided: Vec<_> = report.one_sided_tags().collect();
        one_sided.sort_by(|a, b| a.tag.cmp(&b.tag));
        for tag_report in one_sided {
            let primary_side = tag_report
                .outcomes
                .iter()
                .any(|o| o.primary_path().is_some());
            let path = tag_report
                .outcomes
                .first()
                .and_then(|o| o.primary_path().or_else(|| o.basis_path()))
                .unwrap_or("");
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"path\">{}</td></tr>",
                if primary_side { "PRIMARY" } else { "BASIS" },
                escape_html(&tag_report.tag),
                tag_report.outcomes.len(),
                escape_html(path)
            )?;
        }
        writeln!(html, "</table>")?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    /// Render a standalone page for a single tag's outcomes.
    pub fn generate_tag_page(
        &self,
        tag_report: &TagReport,
        report: &Report,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = format!("Comparison results for <{}>", tag_report.tag);
        self.page_header(&mut html, &title, report)?;
        Self::tag_section(&mut html, tag_report)?;
        Self::page_footer(&mut html)?;
        Ok(html)
    }

    /// Render a standalone page for the symmetric-difference table.
    pub fn generate_symmetric_diff_page(&self, report: &Report) -> Result<String, ReportError> {
        let mut html = String::new();
        self.page_header(&mut html, "Symmetric Differences", report)?;
        Self::symmetric_diff_section(&mut html, report)?;
        Self::page_footer(&mut html)?;
        Ok(html)
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut html = String::new();
        self.page_header(&mut html, "XML Comparison Report", report)?;
        Self::summary_cards(&mut html, report)?;
        for tag_report in &report.tags {
            Self::tag_section(&mut html, tag_report)?;
        }
        Self::symmetric_diff_section(&mut html, report)?;
        Self::page_footer(&mut html)?;
        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

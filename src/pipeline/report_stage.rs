//! Report-writing stage.
//!
//! Renders every requested output format first, then writes the files, so
//! a rendering failure never leaves a partial set of reports behind.

use crate::compare::Report;
use crate::config::CompareConfig;
use crate::error::{Result, TagDiffError};
use crate::reports::{HtmlReporter, JsonReporter, ReportGenerator, TextReporter};
use crate::utils::filename::comparison_filespec;
use std::path::PathBuf;

/// Write the `.rpt` file plus any optional outputs. Returns the paths
/// written, `.rpt` first.
pub fn write_reports(config: &CompareConfig, report: &Report) -> Result<Vec<PathBuf>> {
    let primary = &config.paths.primary;
    let basis = &config.paths.basis;
    let out_dir = &config.output.out_dir;

    // Render everything up front.
    let rpt_content = TextReporter::new()
        .generate(report)
        .map_err(render_error)?;

    let mut html_pages: Vec<(PathBuf, String)> = Vec::new();
    if config.output.html {
        let reporter = HtmlReporter::new();
        for tag_report in &report.tags {
            let page = reporter
                .generate_tag_page(tag_report, report)
                .map_err(render_error)?;
            let path = comparison_filespec(primary, basis, Some(&tag_report.tag), out_dir, "html");
            html_pages.push((path, page));
        }
        let sym_page = reporter
            .generate_symmetric_diff_page(report)
            .map_err(render_error)?;
        html_pages.push((
            comparison_filespec(primary, basis, Some("sym"), out_dir, "html"),
            sym_page,
        ));
    }

    let json_content = if config.output.json {
        Some(JsonReporter::new().generate(report).map_err(render_error)?)
    } else {
        None
    };

    // Write only after every render succeeded.
    std::fs::create_dir_all(out_dir).map_err(|e| TagDiffError::io(out_dir, e))?;
    let mut written = Vec::new();

    let rpt_path = comparison_filespec(primary, basis, None, out_dir, "rpt");
    std::fs::write(&rpt_path, rpt_content).map_err(|e| TagDiffError::io(&rpt_path, e))?;
    tracing::info!("Wrote report file: {}", rpt_path.display());
    written.push(rpt_path);

    for (path, page) in html_pages {
        std::fs::write(&path, page).map_err(|e| TagDiffError::io(&path, e))?;
        tracing::info!("Wrote HTML report: {}", path.display());
        written.push(path);
    }

    if let Some(json) = json_content {
        let json_path = comparison_filespec(primary, basis, None, out_dir, "json");
        std::fs::write(&json_path, json).map_err(|e| TagDiffError::io(&json_path, e))?;
        tracing::info!("Wrote JSON report: {}", json_path.display());
        written.push(json_path);
    }

    Ok(written)
}

fn render_error(err: crate::reports::ReportError) -> TagDiffError {
    TagDiffError::report(
        "rendering comparison report",
        crate::error::ReportErrorKind::FormatError(err.to_string()),
    )
}

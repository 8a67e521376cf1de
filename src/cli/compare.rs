//! Compare command handler.

use crate::compare::CompareEngine;
use crate::config::CompareConfig;
use crate::pipeline::{exit_codes, load_with_context, write_reports, write_tree_dump};
use crate::reports::{ReportGenerator, TextReporter};
use anyhow::Result;

/// Run the comparison, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let primary = load_with_context(&config.paths.primary, "primary", quiet)?;
    let basis = load_with_context(&config.paths.basis, "basis", quiet)?;

    if config.output.tree_dumps {
        write_tree_dump(&primary, &config.output.out_dir)?;
        write_tree_dump(&basis, &config.output.out_dir)?;
    }

    let engine = CompareEngine::new().with_weights(config.weights);
    let report = engine.compare(&primary, &basis)?;

    if !quiet {
        tracing::info!(
            "Compared {} tags: {} exact, {} best match, {} primary only, {} basis only",
            report.summary.tags_compared,
            report.summary.exact,
            report.summary.best_match,
            report.summary.primary_only,
            report.summary.basis_only
        );
        // Console copy carries closest-match detail only in debug mode;
        // the .rpt file written below always has the full tables.
        let console = TextReporter::new()
            .detailed(config.behavior.debug)
            .generate(&report)?;
        println!("{console}");
    }

    write_reports(&config, &report)?;

    if report.has_differences() {
        Ok(exit_codes::DIFFERENCES_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(content.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn test_identical_files_exit_success() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write_fixture(dir.path(), "p.xml", r#"<r><item id="1">A</item></r>"#);
        let basis = write_fixture(dir.path(), "b.xml", r#"<r><item id="1">A</item></r>"#);

        let mut config = CompareConfig::new(primary, basis);
        config.output.out_dir = dir.path().to_path_buf();
        config.behavior.quiet = true;

        let code = run_compare(config).expect("run should succeed");
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_differing_files_exit_nonzero_and_write_rpt() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write_fixture(dir.path(), "p.xml", r#"<r><item id="1">A</item></r>"#);
        let basis = write_fixture(dir.path(), "b.xml", r#"<r><item id="1">B</item></r>"#);

        let mut config = CompareConfig::new(primary, basis);
        config.output.out_dir = dir.path().to_path_buf();
        config.behavior.quiet = true;

        let code = run_compare(config).expect("run should succeed");
        assert_eq!(code, exit_codes::DIFFERENCES_FOUND);
        assert!(dir.path().join("comp_p_b.rpt").exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let basis = write_fixture(dir.path(), "b.xml", "<r/>");

        let mut config = CompareConfig::new(dir.path().join("absent.xml"), basis);
        config.output.out_dir = dir.path().to_path_buf();
        config.behavior.quiet = true;

        assert!(run_compare(config).is_err());
    }

    #[test]
    fn test_tree_dumps_written_when_enabled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = write_fixture(dir.path(), "p.xml", "<r><a/></r>");
        let basis = write_fixture(dir.path(), "b.xml", "<r><a/></r>");

        let mut config = CompareConfig::new(primary, basis);
        config.output.out_dir = dir.path().to_path_buf();
        config.output.tree_dumps = true;
        config.behavior.quiet = true;

        run_compare(config).expect("run should succeed");
        assert!(dir.path().join("outfiles/p.out").exists());
        assert!(dir.path().join("outfiles/b.out").exists());
    }
}

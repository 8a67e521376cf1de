//! Integration tests for tagdiff
//!
//! These tests verify end-to-end functionality: loading XML documents,
//! the tag-scoped comparison engine, and report generation.

use std::path::Path;
use tagdiff::{
    cli::run_compare,
    compare::{CompareEngine, MatchOutcome},
    loader::{load_document, parse_document_str},
    model::Document,
    CompareConfig,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn doc(xml: &str, name: &str) -> Document {
    Document::new(parse_document_str(xml).expect("fixture should parse"), name)
}

// ============================================================================
// Loader Tests
// ============================================================================

mod loader_tests {
    use super::*;

    #[test]
    fn test_load_fixture_documents() {
        let primary = load_document(&fixture_path("loan_primary.xml")).expect("load primary");
        let basis = load_document(&fixture_path("loan_basis.xml")).expect("load basis");

        assert_eq!(primary.root.tag, "MESSAGE");
        assert_eq!(basis.root.tag, "MESSAGE");
        // MESSAGE/DEAL/ASSETS/2x(ASSET/ASSET_DETAIL/2 leaves) = 11, plus
        // LIABILITIES branch and EXPENSE.
        assert!(primary.root.subtree_size() > 10);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_document(&fixture_path("no_such_file.xml")).is_err());
    }
}

// ============================================================================
// Spec Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    fn outcomes_for_tag(primary: &str, basis: &str, tag: &str) -> Vec<MatchOutcome> {
        let report = CompareEngine::new()
            .compare(&doc(primary, "p.xml"), &doc(basis, "b.xml"))
            .expect("compare should succeed");
        report
            .tags
            .into_iter()
            .find(|t| t.tag == tag)
            .map(|t| t.outcomes)
            .unwrap_or_default()
    }

    #[test]
    fn test_identical_item_is_exact() {
        let outcomes = outcomes_for_tag(
            r#"<r><item id="1">A</item></r>"#,
            r#"<r><item id="1">A</item></r>"#,
            "item",
        );
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_exact());
    }

    #[test]
    fn test_text_change_is_best_match_with_detail() {
        let outcomes = outcomes_for_tag(
            r#"<r><item id="1">A</item></r>"#,
            r#"<r><item id="1">B</item></r>"#,
            "item",
        );
        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            MatchOutcome::BestMatch { score, detail, .. } => {
                assert!(*score > 0.0);
                let text = detail.text.as_ref().expect("text diff recorded");
                assert_eq!(text.primary, "A");
                assert_eq!(text.basis, "B");
            }
            other => panic!("expected best match, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_missing_from_basis_is_primary_only() {
        let outcomes = outcomes_for_tag(
            r#"<r><item id="1">A</item></r>"#,
            "<r><other/></r>",
            "item",
        );
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], MatchOutcome::PrimaryOnly { .. }));
    }

    #[test]
    fn test_tag_missing_from_primary_is_basis_only() {
        let outcomes = outcomes_for_tag("<r><item/></r>", "<r><item/><extra/></r>", "extra");
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], MatchOutcome::BasisOnly { .. }));
    }

    #[test]
    fn test_self_closing_elements_compare_exact() {
        let outcomes = outcomes_for_tag("<r><extra/></r>", "<r><extra></extra></r>", "extra");
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_exact());
    }
}

// ============================================================================
// Engine Tests over the Loan Fixtures
// ============================================================================

mod fixture_comparison_tests {
    use super::*;

    fn fixture_report() -> tagdiff::Report {
        let primary = load_document(&fixture_path("loan_primary.xml")).expect("load primary");
        let basis = load_document(&fixture_path("loan_basis.xml")).expect("load basis");
        CompareEngine::new()
            .compare(&primary, &basis)
            .expect("compare should succeed")
    }

    #[test]
    fn test_identical_asset_matches_exactly() {
        let report = fixture_report();
        let assets = report
            .tags
            .iter()
            .find(|t| t.tag == "ASSET")
            .expect("ASSET tag compared");
        assert_eq!(assets.outcomes.len(), 2);
        assert!(assets.outcomes[0].is_exact());
        assert!(assets.outcomes[1].is_best_match());
    }

    #[test]
    fn test_changed_amount_reports_text_diff() {
        let report = fixture_report();
        let amounts = report
            .tags
            .iter()
            .find(|t| t.tag == "AssetCashOrMarketValueAmount")
            .expect("amount tag compared");
        let best = amounts
            .outcomes
            .iter()
            .find(|o| o.is_best_match())
            .expect("one amount changed");
        match best {
            MatchOutcome::BestMatch { detail, .. } => {
                let text = detail.text.as_ref().expect("text diff recorded");
                assert_eq!(text.primary, "18000.00");
                assert_eq!(text.basis, "17500.00");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_expense_is_primary_only_and_party_basis_only() {
        let report = fixture_report();

        let expense = report
            .tags
            .iter()
            .find(|t| t.tag == "EXPENSE")
            .expect("EXPENSE compared");
        assert!(expense.is_one_sided());
        assert!(matches!(
            expense.outcomes[0],
            MatchOutcome::PrimaryOnly { .. }
        ));

        let party = report
            .tags
            .iter()
            .find(|t| t.tag == "PARTY")
            .expect("PARTY compared");
        assert!(party.is_one_sided());
        assert!(matches!(party.outcomes[0], MatchOutcome::BasisOnly { .. }));
    }

    #[test]
    fn test_summary_counts_are_consistent() {
        let report = fixture_report();
        let mut exact = 0;
        let mut best = 0;
        let mut primary_only = 0;
        let mut basis_only = 0;
        for tag in &report.tags {
            for outcome in &tag.outcomes {
                match outcome {
                    MatchOutcome::Exact { .. } => exact += 1,
                    MatchOutcome::BestMatch { .. } => best += 1,
                    MatchOutcome::PrimaryOnly { .. } => primary_only += 1,
                    MatchOutcome::BasisOnly { .. } => basis_only += 1,
                }
            }
        }
        assert_eq!(report.summary.exact, exact);
        assert_eq!(report.summary.best_match, best);
        assert_eq!(report.summary.primary_only, primary_only);
        assert_eq!(report.summary.basis_only, basis_only);
        assert!(report.has_differences());
    }

    #[test]
    fn test_comparison_is_idempotent() {
        let first = fixture_report();
        let second = fixture_report();
        assert_eq!(first, second);

        let json_first = serde_json::to_string(&first).expect("serialize");
        let json_second = serde_json::to_string(&second).expect("serialize");
        assert_eq!(json_first, json_second);
    }
}

// ============================================================================
// CLI Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_full_run_writes_reports_and_signals_differences() {
        let out_dir = tempfile::tempdir().expect("tempdir");

        let mut config = CompareConfig::new(
            fixture_path("loan_primary.xml"),
            fixture_path("loan_basis.xml"),
        );
        config.output.out_dir = out_dir.path().to_path_buf();
        config.output.html = true;
        config.output.json = true;
        config.behavior.quiet = true;

        let code = run_compare(config).expect("run should succeed");
        assert_eq!(code, 1, "differences must be signalled");

        let rpt = out_dir.path().join("comp_loan_primary_loan_basis.rpt");
        assert!(rpt.exists());
        let rpt_content = std::fs::read_to_string(&rpt).expect("read rpt");
        assert!(rpt_content.contains("Comparison Matches for <ASSET>"));
        assert!(rpt_content.contains("ELEMENT DIFFERENCES:"));

        // One HTML page per compared tag plus the symmetric-difference page.
        let html_pages: Vec<_> = std::fs::read_dir(out_dir.path())
            .expect("read out dir")
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
            .collect();
        assert!(html_pages.len() > 2);

        let json = out_dir.path().join("comp_loan_primary_loan_basis.json");
        let json_content = std::fs::read_to_string(&json).expect("read json");
        let value: serde_json::Value = serde_json::from_str(&json_content).expect("valid JSON");
        assert!(value["summary"]["exact"].as_u64().expect("count") > 0);
    }

    #[test]
    fn test_identical_inputs_exit_zero() {
        let out_dir = tempfile::tempdir().expect("tempdir");

        let mut config = CompareConfig::new(
            fixture_path("loan_primary.xml"),
            fixture_path("loan_primary.xml"),
        );
        config.output.out_dir = out_dir.path().to_path_buf();
        config.behavior.quiet = true;

        let code = run_compare(config).expect("run should succeed");
        assert_eq!(code, 0);
    }
}

//! Output file naming.
//!
//! Report files are named after the two input files so runs over different
//! document pairs never clobber each other:
//! `comp_<primary-stem>_<basis-stem>.<ext>`, with an extra `<TAG>` segment
//! for per-tag HTML pages.

use std::path::{Path, PathBuf};

/// File stem of a path ("data/loan_a.xml" -> "loan_a").
fn stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "input".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Build `comp[_TAG]_<primary>_<basis>.<ext>` inside `out_dir`.
pub fn comparison_filespec(
    primary: &Path,
    basis: &Path,
    tag: Option<&str>,
    out_dir: &Path,
    ext: &str,
) -> PathBuf {
    let tag_part = tag.map_or_else(String::new, |t| format!("_{t}"));
    out_dir.join(format!(
        "comp{}_{}_{}.{}",
        tag_part,
        stem(primary),
        stem(basis),
        ext
    ))
}

/// Build the debug tree-dump path for an input file:
/// `<out_dir>/outfiles/<input-stem>.out`.
pub fn tree_dump_filespec(input: &Path, out_dir: &Path) -> PathBuf {
    out_dir.join("outfiles").join(format!("{}.out", stem(input)))
}

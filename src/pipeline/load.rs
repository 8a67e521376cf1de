//! Document loading stage.

use crate::error::Result;
use crate::loader::load_document;
use crate::model::Document;
use crate::utils::filename::tree_dump_filespec;
use std::path::{Path, PathBuf};

/// Load a document, logging which role (primary/basis) it plays.
pub fn load_with_context(path: &Path, role: &str, quiet: bool) -> Result<Document> {
    let document = load_document(path)?;
    if !quiet {
        tracing::info!(
            "Loaded {} document: {} ({} elements)",
            role,
            path.display(),
            document.root.subtree_size()
        );
    }
    Ok(document)
}

/// Write a pretty-printed dump of the parsed element tree to
/// `<out_dir>/outfiles/<input-stem>.out`. Debugging aid for checking what
/// the loader actually produced.
pub fn write_tree_dump(document: &Document, out_dir: &Path) -> Result<PathBuf> {
    let target = tree_dump_filespec(&document.source, out_dir);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| crate::error::TagDiffError::io(parent, e))?;
    }

    let dump = serde_json::to_string_pretty(&document.root)?;
    std::fs::write(&target, dump).map_err(|e| crate::error::TagDiffError::io(&target, e))?;
    tracing::info!("Wrote tree dump: {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document_str;

    #[test]
    fn test_write_tree_dump_creates_outfile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let document = Document::new(
            parse_document_str(r#"<r><item id="1">A</item></r>"#).expect("parse"),
            "sample.xml",
        );

        let path = write_tree_dump(&document, dir.path()).expect("dump should succeed");
        assert!(path.ends_with("outfiles/sample.out"));
        let content = std::fs::read_to_string(&path).expect("read dump");
        assert!(content.contains("\"tag\": \"item\""));
    }
}

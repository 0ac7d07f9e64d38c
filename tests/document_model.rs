use std::fs;

use section_assembly::artifacts::ArtifactError;
use section_assembly::document::{DocumentError, SourceDocument};
use tempfile::tempdir;

#[test]
fn invariant_utf8_rejection() {
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = SourceDocument::ingest("doc.md", invalid_bytes);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}

#[test]
fn invariant_same_content_same_version() {
    let doc1 = SourceDocument::ingest("a.md", b"# Hello".to_vec()).unwrap();
    let doc2 = SourceDocument::ingest("b.md", b"# Hello".to_vec()).unwrap();

    assert_eq!(doc1.version, doc2.version);
    assert!(doc1.version.as_str().starts_with("sha256:"));
}

#[test]
fn invariant_no_newline_normalization() {
    let unix = SourceDocument::ingest("doc.md", b"line\n".to_vec()).unwrap();
    let windows = SourceDocument::ingest("doc.md", b"line\r\n".to_vec()).unwrap();

    assert_ne!(unix.version, windows.version);
}

#[test]
fn load_uses_file_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("guide.md");
    fs::write(&path, "# Guide\n").unwrap();

    let doc = SourceDocument::load(&path).unwrap();
    assert_eq!(doc.name, "guide.md");
    assert_eq!(doc.content, "# Guide\n");
}

#[test]
fn load_reports_missing_and_empty_input() {
    let dir = tempdir().unwrap();

    let missing = SourceDocument::load(&dir.path().join("absent.md"));
    assert!(matches!(
        missing,
        Err(DocumentError::Artifact(ArtifactError::Missing(_)))
    ));

    let empty_path = dir.path().join("empty.md");
    fs::write(&empty_path, "\n\n").unwrap();
    assert!(matches!(
        SourceDocument::load(&empty_path),
        Err(DocumentError::Artifact(ArtifactError::Empty(_)))
    ));
}

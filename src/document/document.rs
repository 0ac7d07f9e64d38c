use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifacts::{read_artifact_bytes, ArtifactError};
use crate::types::identifiers::DocumentVersion;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// A reference document as read from disk, before it is split into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Display name recorded in assembled output, usually the file name.
    pub name: String,
    pub version: DocumentVersion,
    pub content: String,
}

impl SourceDocument {
    /// Ingest raw bytes into a SourceDocument.
    ///
    /// The version is computed on the verified content. No newline
    /// normalization is performed.
    pub fn ingest(name: impl Into<String>, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;
        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(SourceDocument {
            name: name.into(),
            version,
            content,
        })
    }

    /// Read and ingest the document at `path`. Absent and empty files are
    /// reported as [`ArtifactError::Missing`] and [`ArtifactError::Empty`].
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let raw = read_artifact_bytes(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::ingest(name, raw)
    }
}

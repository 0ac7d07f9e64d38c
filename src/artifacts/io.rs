use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    Missing(PathBuf),
    #[error("Artifact is empty: {0}")]
    Empty(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ArtifactError {
    /// Absent or whitespace-only input. Stages treat this as "nothing to do".
    pub fn is_input_missing(&self) -> bool {
        matches!(self, ArtifactError::Missing(_) | ArtifactError::Empty(_))
    }
}

pub fn read_artifact_bytes(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        warn!(path = %path.display(), "artifact is empty");
        return Err(ArtifactError::Empty(path.to_path_buf()));
    }
    Ok(bytes)
}

pub fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    if contents.trim().is_empty() {
        warn!(path = %path.display(), "artifact is empty");
        return Err(ArtifactError::Empty(path.to_path_buf()));
    }
    Ok(contents)
}

fn read_error(path: &Path, err: std::io::Error) -> ArtifactError {
    if err.kind() == ErrorKind::NotFound {
        warn!(path = %path.display(), "artifact not found");
        ArtifactError::Missing(path.to_path_buf())
    } else {
        warn!(path = %path.display(), error = %err, "failed to read artifact");
        ArtifactError::Read {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Write `contents` to `path`, replacing any previous artifact atomically.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ArtifactError> {
    let temp_path = temp_path_for(path);
    let write_error = |source: std::io::Error| {
        warn!(path = %path.display(), error = %source, "failed to write artifact");
        ArtifactError::Write {
            path: path.to_path_buf(),
            source,
        }
    };

    {
        let mut f = fs::File::create(&temp_path).map_err(write_error)?;
        f.write_all(contents.as_bytes()).map_err(write_error)?;
        f.sync_all().map_err(write_error)?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        // Leave nothing behind if the final rename fails.
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

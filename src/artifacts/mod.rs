//! Flat text artifacts that cross stage boundaries.
//!
//! Reads distinguish an absent file from an empty one. Writes go through a
//! sibling temp file and a rename so a reader never sees a partial artifact.

pub mod io;

pub use io::{read_artifact, read_artifact_bytes, write_artifact, ArtifactError};

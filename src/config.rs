//! Pipeline configuration with explicit defaults.
//!
//! Every field has a `v0` default, so a JSON config file only needs the keys
//! it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifacts::{read_artifact, ArtifactError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Weights and stop words of the similarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sequence_weight: f32,
    pub keyword_weight: f32,
    pub stop_words: Vec<String>,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            sequence_weight: 0.3,
            keyword_weight: 0.7,
            stop_words: [
                "pentesting", "i", "am", "looking", "for", "something", "called", "an", "a",
                "the", "help", "with",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Where matched documents live and how confident a match must be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub base_dir: PathBuf,
    pub document_extension: String,
    /// Added to the score of lines containing the port named in the query.
    pub port_boost: f32,
    /// A match must score strictly above this to be used.
    pub min_confidence: f32,
}

impl MatchConfig {
    pub fn v0() -> Self {
        Self {
            base_dir: PathBuf::from("Working"),
            document_extension: "md".into(),
            port_boost: 0.3,
            min_confidence: 0.2,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// File names of the artifacts exchanged between stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactNames {
    pub query: PathBuf,
    pub reference_index: PathBuf,
    pub section_listing: PathBuf,
    pub selection_response: PathBuf,
    pub selection: PathBuf,
    pub assembled_output: PathBuf,
}

impl ArtifactNames {
    pub fn v0() -> Self {
        Self {
            query: "myInput.txt".into(),
            reference_index: "Ports.txt".into(),
            section_listing: "Available_sections.txt".into(),
            selection_response: "IntegerList.txt".into(),
            selection: "intgOUT.txt".into(),
            assembled_output: "SuggestedHelp.txt".into(),
        }
    }
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub scoring: ScoringConfig,
    pub matching: MatchConfig,
    pub artifacts: ArtifactNames,
}

impl PipelineConfig {
    pub fn v0() -> Self {
        Self::default()
    }

    /// Load a JSON config. Missing keys fall back to their `v0` values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_artifact(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::artifacts::{write_artifact, ArtifactError};
use crate::catalog::SectionCatalog;
use crate::document::SourceDocument;
use crate::types::identifiers::{DocumentVersion, SectionAddress};

const BANNER_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 50;
/// Joins a root section with its direct children.
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Not a dotted address at all.
    Malformed,
    /// Well-formed, but no section has this address.
    NotInCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAddress {
    pub requested: String,
    pub reason: SkipReason,
}

/// Result of assembling a selection. `text` is the full artifact body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    /// Resolved addresses, in requested order.
    pub processed: Vec<SectionAddress>,
    pub skipped: Vec<SkippedAddress>,
    pub text: String,
}

impl Assembly {
    pub fn sections_processed(&self) -> usize {
        self.processed.len()
    }

    pub fn write(&self, path: &Path) -> Result<(), ArtifactError> {
        write_artifact(path, &self.text)?;
        info!(
            path = %path.display(),
            sections = self.processed.len(),
            skipped = self.skipped.len(),
            "wrote assembled sections"
        );
        Ok(())
    }
}

/// Content for one address: a root with children brings its direct
/// children along, anything else is returned alone.
pub fn section_content(catalog: &SectionCatalog, address: &SectionAddress) -> Option<String> {
    let section = catalog.get(address)?;
    if !address.is_root() || section.children.is_empty() {
        return Some(section.content.clone());
    }

    let blocks: Vec<&str> = std::iter::once(section.content.as_str())
        .chain(catalog.children(address).map(|child| child.content.as_str()))
        .collect();
    Some(blocks.join(BLOCK_SEPARATOR))
}

/// Renders selected sections of a catalog into one document.
#[derive(Debug, Clone)]
pub struct Assembler {
    source_name: String,
    source_version: Option<DocumentVersion>,
}

impl Assembler {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            source_version: None,
        }
    }

    /// Assembler whose banner also records the document's content version.
    pub fn for_document(document: &SourceDocument) -> Self {
        Self {
            source_name: document.name.clone(),
            source_version: Some(document.version.clone()),
        }
    }

    pub fn assemble<S: AsRef<str>>(&self, catalog: &SectionCatalog, selected: &[S]) -> Assembly {
        self.assemble_at(catalog, selected, Utc::now())
    }

    /// Output follows the order of `selected`. Unknown or malformed
    /// addresses are skipped and reported; they never abort the batch.
    pub fn assemble_at<S: AsRef<str>>(
        &self,
        catalog: &SectionCatalog,
        selected: &[S],
        generated_at: DateTime<Utc>,
    ) -> Assembly {
        let mut processed = Vec::new();
        let mut skipped = Vec::new();
        let mut body = String::new();

        for requested in selected {
            let requested = requested.as_ref().trim();
            let address = match requested.parse::<SectionAddress>() {
                Ok(address) => address,
                Err(e) => {
                    warn!(address = requested, error = %e, "skipping malformed section address");
                    skipped.push(SkippedAddress {
                        requested: requested.to_string(),
                        reason: SkipReason::Malformed,
                    });
                    continue;
                }
            };

            let Some(content) = section_content(catalog, &address) else {
                warn!(address = requested, "section not found in catalog");
                skipped.push(SkippedAddress {
                    requested: requested.to_string(),
                    reason: SkipReason::NotInCatalog,
                });
                continue;
            };

            let _ = write!(
                body,
                "\nSection {address}:\n{}\n{content}\n{}\n",
                "-".repeat(SECTION_RULE_WIDTH),
                "=".repeat(SECTION_RULE_WIDTH),
            );
            processed.push(address);
        }

        let text = format!(
            "{}{body}{}",
            self.header(generated_at),
            footer(processed.len())
        );

        info!(
            source = %self.source_name,
            requested = selected.len(),
            processed = processed.len(),
            skipped = skipped.len(),
            "assembled sections"
        );

        Assembly {
            source: self.source_name.clone(),
            generated_at,
            processed,
            skipped,
            text,
        }
    }

    fn header(&self, generated_at: DateTime<Utc>) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        let mut header = format!("{rule}\nGenerated Help Documentation\nSource: {}\n", self.source_name);
        if let Some(version) = &self.source_version {
            let _ = writeln!(header, "Version: {}", version.as_str());
        }
        let _ = write!(
            header,
            "Generated on: {}\n{rule}\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        header
    }
}

fn footer(processed: usize) -> String {
    format!(
        "\nEnd of documentation - {processed} sections processed\n{}\n",
        "=".repeat(BANNER_WIDTH)
    )
}

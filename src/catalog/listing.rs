//! The "Available sections" outline handed to the generation service.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use super::numbering::SectionCatalog;
use crate::artifacts::{write_artifact, ArtifactError};

const RULE_WIDTH: usize = 50;
const INDENT: &str = "    ";

/// One line per section, indented four spaces per level below the roots:
///
/// ```text
/// Available sections:
/// --------------------------------------------------
/// 1. Intro
///     1.1. Setup
/// ```
pub fn render_listing(catalog: &SectionCatalog) -> String {
    let mut out = String::from("Available sections:\n");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for (address, section) in catalog.iter() {
        let indent = INDENT.repeat(address.depth() - 1);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{indent}{address}. {}", section.title);
    }
    out
}

pub fn write_listing(catalog: &SectionCatalog, path: &Path) -> Result<(), ArtifactError> {
    write_artifact(path, &render_listing(catalog))?;
    info!(path = %path.display(), sections = catalog.len(), "wrote section listing");
    Ok(())
}

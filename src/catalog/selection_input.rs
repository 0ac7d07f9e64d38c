//! Section addresses coming back from the selection step.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::artifacts::{read_artifact, write_artifact, ArtifactError};
use crate::types::identifiers::SectionAddress;

/// Collect every line of a free-text response that is exactly an address
/// (one trailing `.` allowed), in natural order and without duplicates.
pub fn extract_addresses(response: &str) -> Vec<SectionAddress> {
    let addresses: BTreeSet<SectionAddress> = response
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_suffix('.').unwrap_or(line).parse::<SectionAddress>().ok())
        .collect();

    debug!(count = addresses.len(), "extracted section addresses");
    addresses.into_iter().collect()
}

/// Non-blank trimmed lines, order kept. Lines are not validated here so the
/// assembler can report malformed entries alongside unknown ones.
pub fn parse_selection(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_selection(path: &Path) -> Result<Vec<String>, ArtifactError> {
    let selection = parse_selection(&read_artifact(path)?);
    info!(path = %path.display(), count = selection.len(), "read section selection");
    Ok(selection)
}

pub fn render_selection(addresses: &[SectionAddress]) -> String {
    addresses.iter().map(|a| format!("{a}\n")).collect()
}

pub fn write_selection(path: &Path, addresses: &[SectionAddress]) -> Result<(), ArtifactError> {
    write_artifact(path, &render_selection(addresses))
}

//! Splits a `---`-separated markdown document into a section forest.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::section::SectionForest;
use crate::types::identifiers::SectionId;

fn heading_pattern() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(r"^(#{1,6})[ \t]+([^\r\n]+)").expect("heading pattern is a valid regex")
    })
}

/// Parse `raw_text` into a forest of sections.
///
/// Chunks that do not open with a heading are dropped. A document with no
/// heading-bearing chunk produces an empty forest.
pub fn parse(raw_text: &str) -> SectionForest {
    let mut forest = SectionForest::new();
    // Most recent section per level. Entries deeper than the latest insert are dropped.
    let mut last_by_level: BTreeMap<u8, SectionId> = BTreeMap::new();
    let mut dropped = 0usize;

    for chunk in split_chunks(raw_text) {
        let chunk = chunk.trim();
        let Some((level, title)) = parse_heading(chunk) else {
            dropped += 1;
            continue;
        };

        let parent = if level == 1 {
            None
        } else {
            last_by_level.range(..level).next_back().map(|(_, &id)| id)
        };

        let id = forest.push(title, level, chunk.to_string(), parent);
        last_by_level.insert(level, id);
        last_by_level.retain(|&seen, _| seen <= level);
    }

    debug!(
        sections = forest.len(),
        roots = forest.roots().len(),
        dropped_chunks = dropped,
        "parsed section forest"
    );
    forest
}

/// Split on lines consisting of `---`, keeping the text between them verbatim.
fn split_chunks(raw_text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in raw_text.split_inclusive('\n') {
        if line.trim_end() == "---" {
            chunks.push(&raw_text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    chunks.push(&raw_text[start..]);
    chunks
}

fn parse_heading(chunk: &str) -> Option<(u8, String)> {
    let caps = heading_pattern().captures(chunk)?;
    let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() {
        return None;
    }
    Some((level, title.to_string()))
}

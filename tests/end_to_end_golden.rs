use std::fs;

use chrono::{TimeZone, Utc};
use section_assembly::artifacts::read_artifact;
use section_assembly::assembly::Assembler;
use section_assembly::catalog::{extract_addresses, number, read_selection, write_listing, write_selection};
use section_assembly::config::{MatchConfig, PipelineConfig};
use section_assembly::document::{parse, SourceDocument};
use section_assembly::prompt::{compose_content, GenerationRequest, RequestKind};
use section_assembly::selection::{CompositeScorer, QueryMatcher};
use tempfile::tempdir;

const PORTS: &str = "21/tcp open ftp\n22/tcp open ssh\n\n80/tcp open http\n";

const HTTP_DOC: &str = "\
# Web enumeration
Start with the basics.
---
## Directory brute force
gobuster dir -u http://target
---
## Virtual hosts
ffuf -H 'Host: FUZZ.target'
---
# Web exploitation
Look for injection points.
";

#[test]
fn golden_pipeline_from_query_to_assembled_artifact() {
    let work = tempdir().unwrap();
    let docs = tempdir().unwrap();

    let mut config = PipelineConfig::v0();
    config.matching = MatchConfig {
        base_dir: docs.path().to_path_buf(),
        ..MatchConfig::v0()
    };

    // Reference document lives under <base>/<line>/<line>.md
    let doc_dir = docs.path().join("80_tcp open http");
    fs::create_dir_all(&doc_dir).unwrap();
    fs::write(doc_dir.join("80_tcp open http.md"), HTTP_DOC).unwrap();

    let index_path = work.path().join(&config.artifacts.reference_index);
    fs::write(&index_path, PORTS).unwrap();

    // 1. Match
    let query = "I am looking for help with port 80 http";
    let matcher = QueryMatcher::from_config(&config);
    let matched = matcher.match_index_file(query, &index_path);

    assert_eq!(matched.matched_line.as_deref(), Some("80/tcp open http"));
    assert_eq!(matched.line_number, Some(4));
    assert!(matched.is_usable(config.matching.min_confidence));
    let doc_path = matched.resolved_path.clone().unwrap();

    // 2. Parse and number
    let document = SourceDocument::load(&doc_path).unwrap();
    let catalog = number(parse(&document.content));
    assert_eq!(catalog.len(), 4);

    // 3. Listing for the selection request
    let listing_path = work.path().join(&config.artifacts.section_listing);
    write_listing(&catalog, &listing_path).unwrap();
    let listing = read_artifact(&listing_path).unwrap();
    assert_eq!(
        listing,
        format!(
            "Available sections:\n{}\n1. Web enumeration\n    1.1. Directory brute force\n    1.2. Virtual hosts\n2. Web exploitation\n",
            "-".repeat(50)
        )
    );

    let request = GenerationRequest::new(RequestKind::SectionSelection, query, &listing);
    assert!(request.content.starts_with("Input Query:\nI am looking for help with port 80 http\n\nAvailable Sections:\nAvailable sections:"));

    // 4. Selection response comes back from the external service
    let response = "1.2\n2\n1.2\n";
    let selection_path = work.path().join(&config.artifacts.selection);
    write_selection(&selection_path, &extract_addresses(response)).unwrap();
    let selected = read_selection(&selection_path).unwrap();
    assert_eq!(selected, vec!["1.2", "2"]);

    // 5. Assemble
    let time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let assembly = Assembler::for_document(&document).assemble_at(&catalog, &selected, time);
    let output_path = work.path().join(&config.artifacts.assembled_output);
    assembly.write(&output_path).unwrap();

    let banner = "=".repeat(80);
    let rule = "-".repeat(50);
    let closing = "=".repeat(50);
    let expected = format!(
        "{banner}\nGenerated Help Documentation\nSource: 80_tcp open http.md\nVersion: {version}\nGenerated on: 2025-06-01 12:00:00 UTC\n{banner}\n\n\
         \nSection 1.2:\n{rule}\n## Virtual hosts\nffuf -H 'Host: FUZZ.target'\n{closing}\n\
         \nSection 2:\n{rule}\n# Web exploitation\nLook for injection points.\n{closing}\n\
         \nEnd of documentation - 2 sections processed\n{banner}\n",
        version = document.version.as_str()
    );
    assert_eq!(fs::read_to_string(&output_path).unwrap(), expected);
    assert!(assembly.skipped.is_empty());

    // 6. Assembled text concatenates into the answer request unchanged
    let answer = GenerationRequest::new(RequestKind::Answer, query, &assembly.text);
    assert_eq!(answer.content, compose_content(query, &assembly.text));
    assert!(answer.content.contains(assembly.text.trim()));
}

#[test]
fn near_miss_match_stops_before_parsing() {
    let docs = tempdir().unwrap();
    let work = tempdir().unwrap();
    let index_path = work.path().join("Ports.txt");
    fs::write(&index_path, PORTS).unwrap();

    let config = MatchConfig {
        base_dir: docs.path().to_path_buf(),
        ..MatchConfig::v0()
    };
    let matcher = QueryMatcher::new(CompositeScorer::default(), config);
    let matched = matcher.match_index_file("ssh keys", &index_path);

    assert_eq!(matched.matched_line.as_deref(), Some("22/tcp open ssh"));
    assert!(matched.resolved_path.is_none());
    assert!(!matched.is_usable(0.2));
}

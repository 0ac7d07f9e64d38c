//! Query matching and section reassembly for reference documents.
//!
//! `section-assembly` picks the reference document that best matches a
//! free-text query, splits it into a numbered outline of sections, and
//! reassembles a selected subset of those sections into one text artifact.
//! Numbering is deterministic: the same document always yields the same
//! addresses, so addresses written by one stage can be read back by the next.

pub mod artifacts;
pub mod assembly;
pub mod catalog;
pub mod config;
pub mod document;
pub mod prompt;
pub mod selection;
pub mod types;

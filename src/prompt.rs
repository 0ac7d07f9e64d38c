//! Request text for the external generation service.
//!
//! The service receives the user's query followed by the text of an
//! artifact (the section listing, or the assembled sections) and one of two
//! behavior instructions.

use serde::{Deserialize, Serialize};

pub const SECTION_SELECTION_INSTRUCTION: &str = "You are to receive the text of the User and decide which topics would be best to query based on the list you receive. You will repeat back the numbers corresponding to your decision at hand. Each value is separated by a new line.";

pub const ANSWER_INSTRUCTION: &str = "You are to receive helpful data that is relevant to the goal at hand, which is based on the prompt you receive. You will receive a request, and then helpful data to enrich your response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Ask for the addresses of relevant sections, one per line.
    SectionSelection,
    /// Answer the query using the assembled sections.
    Answer,
}

impl RequestKind {
    pub fn instruction(self) -> &'static str {
        match self {
            RequestKind::SectionSelection => SECTION_SELECTION_INSTRUCTION,
            RequestKind::Answer => ANSWER_INSTRUCTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: RequestKind,
    pub instruction: String,
    pub content: String,
}

impl GenerationRequest {
    pub fn new(kind: RequestKind, query: &str, sections: &str) -> Self {
        Self {
            kind,
            instruction: kind.instruction().to_string(),
            content: compose_content(query, sections),
        }
    }
}

/// `Input Query:` block followed by an `Available Sections:` block. Both
/// inputs are trimmed; nothing else is rewritten.
pub fn compose_content(query: &str, sections: &str) -> String {
    format!(
        "Input Query:\n{}\n\nAvailable Sections:\n{}",
        query.trim(),
        sections.trim()
    )
}

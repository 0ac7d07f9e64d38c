pub mod document;
pub mod parser;
pub mod section;

pub use crate::types::identifiers::{DocumentVersion, SectionId};
pub use document::{DocumentError, SourceDocument};
pub use parser::parse;
pub use section::{Section, SectionForest};

pub mod identifiers;
pub mod match_result;

pub use identifiers::{AddressError, DocumentVersion, SectionAddress, SectionId};
pub use match_result::MatchResult;

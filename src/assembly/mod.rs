pub mod assembler;

pub use assembler::{section_content, Assembler, Assembly, SkipReason, SkippedAddress};

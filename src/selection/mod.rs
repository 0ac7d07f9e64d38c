pub mod matcher;
pub mod ranking;

pub use matcher::{sanitize_filename, target_port, QueryMatcher};
pub use ranking::{sequence_ratio, CompositeScorer, ScoreDetails, Scorer};

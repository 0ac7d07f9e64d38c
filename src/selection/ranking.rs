use std::collections::{BTreeSet, HashSet};

use crate::config::ScoringConfig;

/// Components of a similarity score before weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDetails {
    pub sequence_ratio: f32,
    pub keyword_ratio: f32,
    pub shared_keywords: usize,
    pub total_keywords: usize,
}

pub trait Scorer {
    fn score(&self, query: &str, candidate: &str) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f32;

    fn similarity(&self, query: &str, candidate: &str) -> f32 {
        let details = self.score(query, candidate);
        self.score_value(&details)
    }
}

/// Weighted blend of character-sequence similarity and keyword overlap.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    sequence_weight: f32,
    keyword_weight: f32,
    stop_words: HashSet<String>,
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::v0())
    }
}

impl CompositeScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            sequence_weight: config.sequence_weight,
            keyword_weight: config.keyword_weight,
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Lowercased whitespace tokens of `text` minus the stop words.
    pub fn keywords(&self, text: &str) -> BTreeSet<String> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .map(str::to_string)
            .collect()
    }
}

impl Scorer for CompositeScorer {
    fn score(&self, query: &str, candidate: &str) -> ScoreDetails {
        let sequence_ratio = sequence_ratio(&query.to_lowercase(), &candidate.to_lowercase());

        let query_keywords = self.keywords(query);
        let candidate_keywords = self.keywords(candidate);

        let (keyword_ratio, shared_keywords, total_keywords) =
            if query_keywords.is_empty() || candidate_keywords.is_empty() {
                (0.0, 0, 0)
            } else {
                let shared = query_keywords.intersection(&candidate_keywords).count();
                let total = query_keywords.union(&candidate_keywords).count();
                (shared as f32 / total as f32, shared, total)
            };

        ScoreDetails {
            sequence_ratio,
            keyword_ratio,
            shared_keywords,
            total_keywords,
        }
    }

    fn score_value(&self, details: &ScoreDetails) -> f32 {
        let score =
            self.sequence_weight * details.sequence_ratio + self.keyword_weight * details.keyword_ratio;
        debug_assert!(score.is_finite(), "score {score} is not finite");
        score
    }
}

/// Ratcliff/Obershelp similarity: `2 * M / (len(a) + len(b))` where `M` is the
/// number of characters in matching blocks. Two empty strings are identical.
pub fn sequence_ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f32 / total as f32
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`; ties resolve
/// to the block that starts earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j + 1] is the length of the common run ending at a[i - 1], b[j].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            curr[j + 1] = if a[i] == b[j] { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    (best_i, best_j, best_size)
}

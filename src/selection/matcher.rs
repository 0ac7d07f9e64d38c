use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};

use super::ranking::{CompositeScorer, Scorer};
use crate::artifacts::read_artifact;
use crate::config::{MatchConfig, PipelineConfig};
use crate::types::match_result::MatchResult;

fn port_pattern() -> &'static Regex {
    static PORT: OnceLock<Regex> = OnceLock::new();
    PORT.get_or_init(|| Regex::new(r"\bport\s+(\d+)").expect("port pattern is a valid regex"))
}

fn unsafe_filename_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("filename pattern is a valid regex"))
}

/// Port number mentioned as `port N` in the query, if any.
pub fn target_port(query: &str) -> Option<String> {
    port_pattern()
        .captures(&query.to_lowercase())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Replace characters that are not allowed in file names with `_` and trim.
pub fn sanitize_filename(name: &str) -> String {
    unsafe_filename_chars()
        .replace_all(name, "_")
        .trim()
        .to_string()
}

/// Finds the reference index line that best matches a free-text query.
pub struct QueryMatcher<S> {
    scorer: S,
    config: MatchConfig,
}

impl QueryMatcher<CompositeScorer> {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(CompositeScorer::new(&config.scoring), config.matching.clone())
    }
}

impl<S> QueryMatcher<S>
where
    S: Scorer,
{
    pub fn new(scorer: S, config: MatchConfig) -> Self {
        Self { scorer, config }
    }

    /// Score every non-blank line and keep the first line with the highest score.
    pub fn match_lines<I, L>(&self, query: &str, lines: I) -> MatchResult
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let port = target_port(query);
        let mut best: Option<(usize, String, f32)> = None;

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let mut score = self.scorer.similarity(query, line);
            if let Some(port) = port.as_deref() {
                if line.contains(port) {
                    score += self.config.port_boost;
                }
            }

            let improves = match &best {
                Some((_, _, best_score)) => score > *best_score,
                None => true,
            };
            if improves {
                best = Some((i + 1, line.to_string(), score));
            }
        }

        let Some((line_number, matched_line, score)) = best else {
            info!("no non-blank reference line to match against");
            return MatchResult::none();
        };

        info!(
            query = query.lines().next().unwrap_or_default(),
            matched_line = %matched_line,
            line_number,
            score,
            "best reference match"
        );

        let candidate = self.document_path_for(&matched_line);
        let resolved_path = if candidate.exists() {
            debug!(path = %candidate.display(), "resolved reference document");
            Some(candidate)
        } else {
            warn!(path = %candidate.display(), "constructed document path does not exist");
            None
        };

        MatchResult {
            matched_line: Some(matched_line),
            line_number: Some(line_number),
            score,
            resolved_path,
        }
    }

    /// Match against the reference index stored at `index_path`.
    ///
    /// Read failures are reported and yield [`MatchResult::none`].
    pub fn match_index_file(&self, query: &str, index_path: &Path) -> MatchResult {
        match read_artifact(index_path) {
            Ok(contents) => self.match_lines(query, contents.lines()),
            Err(e) => {
                warn!(path = %index_path.display(), error = %e, "reference index unavailable");
                MatchResult::none()
            }
        }
    }

    /// `<base_dir>/<name>/<name>.<ext>` where `<name>` is the sanitized line.
    pub fn document_path_for(&self, matched_line: &str) -> PathBuf {
        let name = sanitize_filename(matched_line);
        self.config
            .base_dir
            .join(&name)
            .join(format!("{name}.{}", self.config.document_extension))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

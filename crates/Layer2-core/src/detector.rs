//! Tool Detector - 쿼리와 디렉토리 컨텍스트 기반 도구 추정
//!
//! Scores free text plus directory-listing context against the pattern
//! catalog and returns a best-guess tool, or `None` below the confidence
//! threshold.

use crate::catalog::{catalog, ToolId};
use std::path::Path;

/// Bonus added once per context clue found among directory entries
const CONTEXT_CLUE_BONUS: i32 = 15;

/// Bonus for a `*.js`-like filename token in the query
const JS_FILENAME_BONUS: i32 = 50;

/// Bonus for "list/show/display ... container" phrasing
const CONTAINER_LISTING_BONUS: i32 = 60;

/// Minimum winning score for a confident detection
const SIGNIFICANCE_THRESHOLD: i32 = 40;

/// Detects the most likely tool from a query and directory context
pub struct ToolDetector;

impl ToolDetector {
    pub fn new() -> Self {
        Self
    }

    /// Score the query against every tool profile and pick the best match.
    ///
    /// Ties are broken by declared catalog order (first tool wins).
    pub fn detect(&self, query: &str, directory_entries: &[String]) -> Option<ToolId> {
        let catalog = catalog();
        let mut best: Option<(ToolId, i32)> = None;

        for profile in &catalog.tools {
            let mut score = 0;

            for (keyword, weight) in &profile.keywords {
                if keyword.is_match(query) {
                    score += weight;
                }
            }

            // Context clues carry a low fixed weight so they corroborate
            // rather than override query intent; each clue counts once no
            // matter how many entries match it
            for clue in profile.context_clues {
                if directory_entries.iter().any(|entry| entry.contains(clue)) {
                    score += CONTEXT_CLUE_BONUS;
                }
            }

            match profile.id {
                ToolId::NodeJs if catalog.js_filename.is_match(query) => {
                    score += JS_FILENAME_BONUS;
                }
                ToolId::Docker if catalog.container_listing.is_match(query) => {
                    score += CONTAINER_LISTING_BONUS;
                }
                _ => {}
            }

            // Strictly-greater keeps the first tool on equal scores
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((profile.id, score));
            }
        }

        let (tool, score) = best?;
        if score < SIGNIFICANCE_THRESHOLD {
            tracing::debug!(score, "no confident tool detection");
            return None;
        }

        tracing::debug!(tool = tool.as_str(), score, "detected tool");
        Some(tool)
    }

    /// Detect using the entries of `dir` as context
    pub fn detect_in_dir(&self, query: &str, dir: &Path) -> Option<ToolId> {
        self.detect(query, &read_dir_entries(dir))
    }
}

impl Default for ToolDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory context provider - read failure is absorbed as "no context"
pub fn read_dir_entries(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            tracing::debug!("ignoring unreadable context directory: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_git_from_keywords() {
        let detector = ToolDetector::new();
        assert_eq!(detector.detect("push my code", &[]), Some(ToolId::Git));
        // "commit" alone already clears the threshold with weight 100
        assert_eq!(
            detector.detect("commit my changes", &[]),
            Some(ToolId::Git)
        );
    }

    #[test]
    fn test_detect_is_case_insensitive_and_whole_word() {
        let detector = ToolDetector::new();
        assert_eq!(detector.detect("COMMIT my changes", &[]), Some(ToolId::Git));
        // "committee" must not count as "commit"
        assert_eq!(detector.detect("the committee meets", &[]), None);
    }

    #[test]
    fn test_below_threshold_returns_none() {
        let detector = ToolDetector::new();
        assert_eq!(detector.detect("make me a sandwich", &[]), None);
        assert_eq!(detector.detect("", &[]), None);
    }

    #[test]
    fn test_js_filename_bonus() {
        let detector = ToolDetector::new();
        assert_eq!(
            detector.detect("run server.js", &[]),
            Some(ToolId::NodeJs)
        );
    }

    #[test]
    fn test_container_listing_bonus() {
        let detector = ToolDetector::new();
        assert_eq!(
            detector.detect("show all running containers", &[]),
            Some(ToolId::Docker)
        );
    }

    #[test]
    fn test_context_clues_counted_once_per_clue() {
        let detector = ToolDetector::new();
        // Three entries matching the same ".js" clue add the bonus once:
        // two distinct nodejs clues (15 + 15) plus "install" (70) beats
        // linux's "file" (60)
        let entries = vec![
            "a.js".to_string(),
            "b.js".to_string(),
            "c.js".to_string(),
            "package.json".to_string(),
        ];
        assert_eq!(
            detector.detect("install the file watcher", &entries),
            Some(ToolId::NodeJs)
        );
    }

    #[test]
    fn test_context_alone_is_not_enough() {
        let detector = ToolDetector::new();
        // Two git clues (.git matches both ".git" and "git") give 30 < 40
        let entries = vec![".git".to_string()];
        assert_eq!(detector.detect("something unrelated", &entries), None);
    }

    #[test]
    fn test_unreadable_dir_yields_no_context() {
        let entries = read_dir_entries(Path::new("/nonexistent/clio/test/dir"));
        assert!(entries.is_empty());
    }
}

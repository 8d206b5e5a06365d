//! Text restoration against a dictionary trie.
//!
//! Damaged text is restored token by token. A token containing the trie's
//! wildcard character is resolved against the dictionary and rewritten with
//! the original token's capitalisation; every other token is copied as is.
//! Lines are split on whitespace and re-joined with single spaces.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::restore::RestoreConfig;
use crate::data_structures::kilo_ranker::{self, restore_case, RankingResult, ScoredMatch};
use crate::data_structures::lanai_trie::LanaiTrie;
use crate::error::keywords::KeywordStoreError;

/// How a damaged token is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RestoreMode {
    /// Replace the token with its best match, wrapped in markers
    #[default]
    Best,

    /// Replace the token with the list of every match
    All,
}

/// Restores damaged text using a [`LanaiTrie`].
#[derive(Debug, Clone)]
pub struct TextRestorer {
    best_match_open: String,
    best_match_close: String,
}

impl Default for TextRestorer {
    fn default() -> Self {
        Self::from_config(&RestoreConfig::default())
    }
}

impl TextRestorer {
    /// Creates a restorer with the default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a restorer from configuration.
    pub fn from_config(config: &RestoreConfig) -> Self {
        Self {
            best_match_open: config.best_match_open.clone(),
            best_match_close: config.best_match_close.clone(),
        }
    }

    /// Restores a single token.
    pub fn restore_token(&self, token: &str, trie: &LanaiTrie, mode: RestoreMode) -> String {
        if !token.contains(trie.config().wildcard) {
            return token.to_string();
        }

        match mode {
            RestoreMode::Best => match trie.find_best_match(token) {
                Some(word) => format!(
                    "{}{}{}",
                    self.best_match_open,
                    restore_case(token, &word),
                    self.best_match_close
                ),
                None => {
                    debug!(token, "No match for damaged token");
                    token.to_string()
                }
            },
            RestoreMode::All => {
                let words: Vec<String> = trie
                    .find_all_matches_with_frequency(token)
                    .iter()
                    .map(|entry| restore_case(token, &entry.word))
                    .collect();
                format!("[{}]", words.join(", "))
            }
        }
    }

    /// Restores every token of one line.
    pub fn restore_line(&self, line: &str, trie: &LanaiTrie, mode: RestoreMode) -> String {
        line.split_whitespace()
            .map(|token| self.restore_token(token, trie, mode))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Restores a whole text; every output line ends with a newline.
    pub fn restore_text(&self, text: &str, trie: &LanaiTrie, mode: RestoreMode) -> String {
        let mut restored = String::with_capacity(text.len());
        for line in text.lines() {
            restored.push_str(&self.restore_line(line, trie, mode));
            restored.push('\n');
        }
        restored
    }

    /// Reads a file and restores its text.
    ///
    /// # Errors
    ///
    /// * `KeywordStoreError::FileNotFound` - If the input does not exist.
    /// * `KeywordStoreError::Read` - If the input cannot be read.
    pub fn restore_file<P: AsRef<Path>>(
        &self,
        path: P,
        trie: &LanaiTrie,
        mode: RestoreMode,
    ) -> Result<String, KeywordStoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| KeywordStoreError::from_read(path, e))?;
        Ok(self.restore_text(&text, trie, mode))
    }

    /// Scores every match for a damaged token, spelled with the token's
    /// capitalisation.
    ///
    /// # Errors
    ///
    /// * `RankingError::EmptyMatches` - If nothing in the trie matches.
    pub fn confidence_report(&self, token: &str, trie: &LanaiTrie) -> RankingResult<Vec<ScoredMatch>> {
        let matches = trie.find_all_matches_with_frequency(token);
        let mut scored = kilo_ranker::confidence_scored(&matches)?;
        for entry in &mut scored {
            entry.word = restore_case(token, &entry.word);
        }
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::kilo_ranker::RankingError;
    use tempfile::tempdir;

    fn dictionary() -> LanaiTrie {
        let mut trie = LanaiTrie::new();
        trie.insert("the", 10);
        trie.insert("cat", 3);
        trie.insert("car", 1);
        trie.insert("cot", 5);
        trie.insert("news", 2);
        trie
    }

    #[test]
    fn test_best_mode_restores_with_case() {
        let restorer = TextRestorer::new();
        let trie = dictionary();

        assert_eq!(
            restorer.restore_line("T*e C*t sat  on   the N*ws", &trie, RestoreMode::Best),
            "<The> <Cot> sat on the <News>"
        );
    }

    #[test]
    fn test_best_mode_keeps_unmatched_token() {
        let restorer = TextRestorer::new();
        assert_eq!(
            restorer.restore_token("z*z", &dictionary(), RestoreMode::Best),
            "z*z"
        );
    }

    #[test]
    fn test_all_mode_lists_ranked_matches() {
        let restorer = TextRestorer::new();
        let trie = dictionary();

        assert_eq!(
            restorer.restore_token("C*T", &trie, RestoreMode::All),
            "[CoT, CaT]"
        );
        assert_eq!(restorer.restore_token("q*", &trie, RestoreMode::All), "[]");
    }

    #[test]
    fn test_custom_markers() {
        let config = RestoreConfig {
            best_match_open: "{".to_string(),
            best_match_close: "}".to_string(),
            ..RestoreConfig::default()
        };
        let restorer = TextRestorer::from_config(&config);

        assert_eq!(
            restorer.restore_token("c*r", &dictionary(), RestoreMode::Best),
            "{car}"
        );
    }

    #[test]
    fn test_restore_text_line_by_line() {
        let restorer = TextRestorer::new();
        let text = "th* cat\n\nc*t\n";

        assert_eq!(
            restorer.restore_text(text, &dictionary(), RestoreMode::Best),
            "<the> cat\n\n<cot>\n"
        );
    }

    #[test]
    fn test_restore_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("damaged.txt");
        fs::write(&path, "C*t\n").unwrap();

        let restorer = TextRestorer::new();
        assert_eq!(
            restorer.restore_file(&path, &dictionary(), RestoreMode::Best).unwrap(),
            "<Cot>\n"
        );
        assert!(matches!(
            restorer.restore_file(dir.path().join("absent.txt"), &dictionary(), RestoreMode::Best),
            Err(KeywordStoreError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_confidence_report() {
        let restorer = TextRestorer::new();
        let report = restorer.confidence_report("C*t", &dictionary()).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].word, "Cot");
        assert!((report[0].confidence - 62.5).abs() < 1e-9);
        assert_eq!(report[1].word, "Cat");
        assert!((report[1].confidence - 37.5).abs() < 1e-9);

        assert_eq!(
            restorer.confidence_report("x*x", &dictionary()),
            Err(RankingError::EmptyMatches)
        );
    }
}

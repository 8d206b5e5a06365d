// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kilo Ranker: post-processing of ranked match sets.
//!
//! The functions here take the ranked `WordEntry` list produced by the
//! [`LanaiTrie`] and derive a best match, per-word confidence scores, or a
//! case-restored spelling. They hold no state and never touch the trie.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::kilo_ranker::{best_match, confidence_scored};
//! use olelo_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("cat", 3);
//! trie.insert("cot", 5);
//!
//! let matches = trie.find_all_matches_with_frequency("c*t");
//! assert_eq!(best_match(&matches), Some("cot"));
//!
//! let scored = confidence_scored(&matches).unwrap();
//! assert_eq!(scored[0].confidence, 62.5);
//! assert_eq!(scored[1].confidence, 37.5);
//! ```
//!
//! [`LanaiTrie`]: crate::data_structures::lanai_trie::LanaiTrie

mod casing;
mod error;

use serde::{Deserialize, Serialize};

pub use casing::restore_case;
pub use error::{RankingError, RankingResult};

use crate::data_structures::lanai_trie::WordEntry;

/// A match together with its share of the match set's total frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// The matched word
    pub word: String,

    /// The word's frequency
    pub frequency: u64,

    /// Percentage of the total frequency, in `0.0..=100.0`
    pub confidence: f64,
}

/// Returns the word of the first (highest-ranked) match.
pub fn best_match(matches: &[WordEntry]) -> Option<&str> {
    matches.first().map(|entry| entry.word.as_str())
}

/// Scores each match by its share of the total frequency.
///
/// Input order is preserved, so a ranked match set yields ranked scores.
///
/// # Errors
///
/// * `RankingError::EmptyMatches` - If `matches` is empty.
/// * `RankingError::ZeroTotalFrequency` - If every frequency is zero.
pub fn confidence_scored(matches: &[WordEntry]) -> RankingResult<Vec<ScoredMatch>> {
    if matches.is_empty() {
        return Err(RankingError::EmptyMatches);
    }

    // u128 so that many near-maximal frequencies cannot overflow the sum
    let total: u128 = matches.iter().map(|entry| u128::from(entry.frequency)).sum();
    if total == 0 {
        return Err(RankingError::ZeroTotalFrequency(matches.len()));
    }

    let total = total as f64;
    Ok(matches
        .iter()
        .map(|entry| ScoredMatch {
            word: entry.word.clone(),
            frequency: entry.frequency,
            confidence: entry.frequency as f64 / total * 100.0,
        })
        .collect())
}

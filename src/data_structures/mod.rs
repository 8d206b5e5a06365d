//! Data structures for Olelo.
//!
//! This module contains the dictionary engine and the pure functions that
//! post-process its results:
//! - `lanai_trie`: the frequency-weighted character trie
//! - `kilo_ranker`: best-match selection, confidence scoring and case restoration

pub mod kilo_ranker;
pub mod lanai_trie;

// Re-export common data structures
pub use kilo_ranker::{RankingError, RankingResult, ScoredMatch};
pub use lanai_trie::{
    InsertOutcome, LanaiTrie, LanaiTrieConfig, SharedLanaiTrie, WordEntry, WordRejection,
};

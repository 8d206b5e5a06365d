// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! This module provides a character trie that stores dictionary words with
//! usage frequencies and resolves wildcard patterns against them.
//!
//! # Features
//!
//! - Frequency accumulation: inserting a word again adds to its weight
//! - Deletion that prunes every node left childless and non-terminal
//! - Fixed-length wildcard matching, one wildcard per character
//! - Deterministic ranking: frequency descending, then word ascending
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::lanai_trie::{LanaiTrie, WordEntry};
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("cat", 3);
//! trie.insert("car", 1);
//! trie.insert("cot", 5);
//!
//! let matches = trie.find_all_matches_with_frequency("c*t");
//! assert_eq!(matches, vec![WordEntry::new("cot", 5), WordEntry::new("cat", 3)]);
//! assert_eq!(trie.find_best_match("c*t").as_deref(), Some("cot"));
//! ```

mod dump;
mod node;
mod pattern;
mod shared;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use dump::TreeDump;
pub use shared::SharedLanaiTrie;
use node::TrieNode;

/// Default wildcard character used in patterns.
pub const DEFAULT_WILDCARD: char = '*';

/// Default maximum word length, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 128;

/// Characters a stored word may not contain: the keyword-list field
/// separator and line breaks.
pub const RESERVED_CHARACTERS: [char; 3] = [',', '\n', '\r'];

/// Why a word cannot be stored in the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordRejection {
    /// The word is empty after trimming.
    #[error("word is empty")]
    Empty,

    /// The word contains a reserved character.
    #[error("word contains reserved character {0:?}")]
    ReservedCharacter(char),

    /// The word exceeds the configured maximum length.
    #[error("word has {length} characters, the maximum is {max}")]
    TooLong {
        /// Length of the normalized word, in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// The frequency to insert is zero.
    #[error("frequency must be greater than 0")]
    ZeroFrequency,
}

/// What an accepted insert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The word was new.
    Added,

    /// The word was present; its frequency grew to `total`.
    Reinforced {
        /// Frequency after the insert
        total: u64,
    },
}

/// A dictionary word together with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    /// The lowercase word
    pub word: String,

    /// How often the word has been seen; always positive for stored words
    pub frequency: u64,
}

impl WordEntry {
    /// Creates a new entry.
    pub fn new<W: Into<String>>(word: W, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone)]
pub struct LanaiTrieConfig {
    /// Character that matches exactly one arbitrary character in a pattern
    pub wildcard: char,

    /// Longest word accepted by `insert`, in characters
    pub max_word_length: usize,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl LanaiTrieConfig {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wildcard character.
    ///
    /// Patterns are lowercased before matching, so the wildcard must not be
    /// a letter or digit; an uppercase letter could never match.
    pub fn wildcard(mut self, value: char) -> Self {
        debug_assert!(
            !value.is_alphanumeric() && !value.is_whitespace(),
            "wildcard must not be alphanumeric or whitespace: {value:?}"
        );
        self.wildcard = value;
        self
    }

    /// Sets the maximum accepted word length.
    pub fn max_word_length(mut self, value: usize) -> Self {
        self.max_word_length = value;
        self
    }
}

/// One recorded step of a deletion walk: the edge taken and the state of the
/// node it led to.
#[derive(Debug, Clone, Copy)]
struct PathStep {
    edge: char,
    child_count: usize,
    is_terminal: bool,
}

/// Lanai Trie is a frequency-weighted word dictionary keyed by characters.
///
/// Key features:
/// * Case-insensitive: words and patterns are trimmed and lowercased
/// * Exact search, prefix completion and wildcard pattern matching
/// * Structural pruning on deletion so no dead branches survive
/// * Exact word count maintained alongside the node graph
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of terminal nodes
    size: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            size: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Normalizes a word and checks that it can be stored.
    ///
    /// # Returns
    ///
    /// The trimmed, lowercased word, or the reason it would be ignored by
    /// [`insert`](LanaiTrie::insert).
    pub fn check_word(&self, word: &str) -> Result<String, WordRejection> {
        let key = normalize(word).ok_or(WordRejection::Empty)?;

        if let Some(c) = key.chars().find(|c| RESERVED_CHARACTERS.contains(c)) {
            return Err(WordRejection::ReservedCharacter(c));
        }

        let length = key.chars().count();
        if length > self.config.max_word_length {
            return Err(WordRejection::TooLong {
                length,
                max: self.config.max_word_length,
            });
        }

        Ok(key)
    }

    /// Inserts a word with the given frequency.
    ///
    /// If the word is already present its frequency grows by `frequency`
    /// instead of being reset. A zero frequency and any word rejected by
    /// [`check_word`](LanaiTrie::check_word) are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a new word was added, `false` if an existing word was
    /// reinforced or the input was ignored.
    pub fn insert<K>(&mut self, word: K, frequency: u64) -> bool
    where
        K: AsRef<str>,
    {
        match self.insert_with_outcome(word.as_ref(), frequency) {
            Ok(outcome) => outcome == InsertOutcome::Added,
            Err(reason) => {
                debug!(word = word.as_ref(), %reason, "Ignoring insert");
                false
            }
        }
    }

    /// Inserts a word and reports what happened.
    ///
    /// # Errors
    ///
    /// The [`WordRejection`] that made the insert a no-op; the trie is
    /// unchanged in that case.
    pub fn insert_with_outcome<K>(
        &mut self,
        word: K,
        frequency: u64,
    ) -> Result<InsertOutcome, WordRejection>
    where
        K: AsRef<str>,
    {
        let key = self.check_word(word.as_ref())?;
        if frequency == 0 {
            return Err(WordRejection::ZeroFrequency);
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }

        if node.is_terminal {
            node.frequency = node.frequency.saturating_add(frequency);
            Ok(InsertOutcome::Reinforced {
                total: node.frequency,
            })
        } else {
            node.mark_terminal(key, frequency);
            self.size += 1;
            Ok(InsertOutcome::Added)
        }
    }

    /// Checks whether a word is stored in the trie.
    pub fn search<K>(&self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        normalize(word.as_ref())
            .and_then(|key| self.find_node(&key))
            .is_some_and(|node| node.is_terminal)
    }

    /// Returns the frequency of a stored word.
    pub fn frequency<K>(&self, word: K) -> Option<u64>
    where
        K: AsRef<str>,
    {
        normalize(word.as_ref())
            .and_then(|key| self.find_node(&key))
            .filter(|node| node.is_terminal)
            .map(|node| node.frequency)
    }

    /// Overwrites the frequency of an existing word.
    ///
    /// # Returns
    ///
    /// The previous frequency, or `None` if the word is not stored (including
    /// when it only exists as a prefix of other words) or `frequency` is 0.
    pub fn set_frequency<K>(&mut self, word: K, frequency: u64) -> Option<u64>
    where
        K: AsRef<str>,
    {
        if frequency == 0 {
            debug!("Ignoring frequency update to zero");
            return None;
        }
        let key = normalize(word.as_ref())?;

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.get_mut(&c)?;
        }

        if !node.is_terminal {
            return None;
        }
        Some(std::mem::replace(&mut node.frequency, frequency))
    }

    /// Removes a word from the trie.
    ///
    /// The walk first records the path, then decides bottom-up which suffix
    /// of that path has become dead weight, and only then mutates: either the
    /// whole dead suffix is detached from its nearest needed ancestor, or the
    /// terminal flag alone is cleared when the node still has children.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and removed, `false` otherwise. Nothing
    /// is modified when `false` is returned.
    pub fn delete<K>(&mut self, word: K) -> bool
    where
        K: AsRef<str>,
    {
        let Some(key) = normalize(word.as_ref()) else {
            debug!("Ignoring delete of empty word");
            return false;
        };
        let chars: Vec<char> = key.chars().collect();

        let mut path = Vec::with_capacity(chars.len());
        let mut node = &self.root;
        for &c in &chars {
            match node.children.get(&c) {
                Some(child) => {
                    path.push(PathStep {
                        edge: c,
                        child_count: child.children.len(),
                        is_terminal: child.is_terminal,
                    });
                    node = child;
                }
                None => return false,
            }
        }
        if !node.is_terminal {
            return false;
        }

        let prune_from = prune_point(&path);
        let stop = prune_from.unwrap_or(path.len());

        let mut node = &mut self.root;
        for step in &path[..stop] {
            node = match node.children.get_mut(&step.edge) {
                Some(child) => child,
                None => return false,
            };
        }

        match prune_from {
            Some(index) => {
                node.children.remove(&path[index].edge);
            }
            None => node.clear_terminal(),
        }
        self.size -= 1;

        true
    }

    /// Finds every stored word matching a wildcard pattern.
    ///
    /// Each wildcard character matches exactly one character, so every
    /// returned word has the pattern's length. Any other character must match
    /// literally.
    ///
    /// # Returns
    ///
    /// Matches ranked by frequency descending, ties broken by ascending word.
    /// An empty pattern yields no matches.
    pub fn find_all_matches_with_frequency<P>(&self, pattern: P) -> Vec<WordEntry>
    where
        P: AsRef<str>,
    {
        let Some(pattern) = normalize(pattern.as_ref()) else {
            return Vec::new();
        };
        let pattern: Vec<char> = pattern.chars().collect();

        let mut matches = Vec::new();
        pattern::collect_matches(&self.root, &pattern, 0, self.config.wildcard, &mut matches);
        pattern::rank(&mut matches);
        matches
    }

    /// Returns the highest-ranked word matching a wildcard pattern.
    ///
    /// This is always the head of [`find_all_matches_with_frequency`], so it
    /// follows the same tie-break rule.
    ///
    /// [`find_all_matches_with_frequency`]: LanaiTrie::find_all_matches_with_frequency
    pub fn find_best_match<P>(&self, pattern: P) -> Option<String>
    where
        P: AsRef<str>,
    {
        self.find_all_matches_with_frequency(pattern)
            .into_iter()
            .next()
            .map(|entry| entry.word)
    }

    /// Returns every stored word starting with `prefix`, ranked.
    ///
    /// An empty prefix returns every word.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<WordEntry>
    where
        P: AsRef<str>,
    {
        let start = match normalize(prefix.as_ref()) {
            Some(key) => match self.find_node(&key) {
                Some(node) => node,
                None => return Vec::new(),
            },
            None => &self.root,
        };

        let mut words = Vec::new();
        pattern::collect_words(start, &mut words);
        pattern::rank(&mut words);
        words
    }

    /// Returns every stored word with its frequency, ranked.
    pub fn get_all_words(&self) -> Vec<WordEntry> {
        let mut words = Vec::with_capacity(self.size);
        pattern::collect_words(&self.root, &mut words);
        pattern::rank(&mut words);
        words
    }

    /// Exports the dictionary as ranked entries.
    pub fn export_entries(&self) -> Vec<WordEntry> {
        self.get_all_words()
    }

    /// Replaces the dictionary with the given entries.
    ///
    /// The trie is cleared first; entries are then inserted in order, so
    /// duplicate words accumulate their frequencies.
    ///
    /// # Returns
    ///
    /// The number of distinct words after loading.
    pub fn load_entries<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = WordEntry>,
    {
        self.clear();
        self.extend(entries);
        self.size
    }

    /// Number of words stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Returns a displayable tree rendering of the trie.
    pub fn tree_dump(&self) -> TreeDump<'_> {
        TreeDump::new(self)
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Total node count including the root.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<WordEntry> for LanaiTrie {
    fn extend<I: IntoIterator<Item = WordEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.insert(&entry.word, entry.frequency);
        }
    }
}

impl FromIterator<WordEntry> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(entries: I) -> Self {
        let mut trie = Self::new();
        trie.extend(entries);
        trie
    }
}

/// Trims and lowercases a word, rejecting empty results.
fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Finds the topmost node on a deletion path that can be detached.
///
/// The terminal node at the end of the path is removable only if it has no
/// children. Walking back up, each ancestor is removable only if it is not
/// terminal and its single child is the one just removed.
fn prune_point(path: &[PathStep]) -> Option<usize> {
    let (last, ancestors) = path.split_last()?;
    if last.child_count > 0 {
        return None;
    }

    let mut prune_from = ancestors.len();
    for (index, step) in ancestors.iter().enumerate().rev() {
        if step.is_terminal || step.child_count > 1 {
            break;
        }
        prune_from = index;
    }

    Some(prune_from)
}

// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children outright, so a subtree is dropped the moment its edge is removed
//! from the parent.

use std::collections::BTreeMap;

/// A node in the Lanai Trie.
///
/// Each node represents a character position in one or more words. Terminal
/// nodes carry the frequency and the full word that ends at them.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes, kept in character order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether this node represents the end of a word
    pub is_terminal: bool,

    /// Frequency of the word ending here; 0 when not terminal
    pub frequency: u64,

    /// The complete word ending here; empty when not terminal
    pub word: String,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this node as the end of `word` with the given frequency.
    pub fn mark_terminal(&mut self, word: String, frequency: u64) {
        self.is_terminal = true;
        self.word = word;
        self.frequency = frequency;
    }

    /// Clears the terminal state, restoring the non-terminal invariants.
    pub fn clear_terminal(&mut self) {
        self.is_terminal = false;
        self.frequency = 0;
        self.word.clear();
    }

    /// Number of nodes in the subtree rooted here, this node included.
    #[cfg(test)]
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}

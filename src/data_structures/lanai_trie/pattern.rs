// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Traversal helpers: wildcard pattern matching and word collection.
//!
//! A wildcard stands for exactly one character, so every match has the same
//! character count as the pattern that produced it.

use std::cmp::Ordering;

use super::node::TrieNode;
use super::WordEntry;

/// Backtracking matcher over a pattern already split into characters.
///
/// At each depth a wildcard branches over every child, while any other
/// character follows the single child on that edge or abandons the branch.
pub(super) fn collect_matches(
    node: &TrieNode,
    pattern: &[char],
    index: usize,
    wildcard: char,
    matches: &mut Vec<WordEntry>,
) {
    if index == pattern.len() {
        if node.is_terminal {
            matches.push(WordEntry::new(node.word.clone(), node.frequency));
        }
        return;
    }

    let c = pattern[index];
    if c == wildcard {
        for child in node.children.values() {
            collect_matches(child, pattern, index + 1, wildcard, matches);
        }
    } else if let Some(child) = node.children.get(&c) {
        collect_matches(child, pattern, index + 1, wildcard, matches);
    }
}

/// Collects every terminal node in the subtree rooted at `node`.
pub(super) fn collect_words(node: &TrieNode, words: &mut Vec<WordEntry>) {
    if node.is_terminal {
        words.push(WordEntry::new(node.word.clone(), node.frequency));
    }

    for child in node.children.values() {
        collect_words(child, words);
    }
}

/// Ranking order shared by every enumeration: frequency descending, then
/// word ascending.
fn rank_order(a: &WordEntry, b: &WordEntry) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}

/// Sorts entries into ranking order.
pub(super) fn rank(entries: &mut [WordEntry]) {
    entries.sort_by(rank_order);
}

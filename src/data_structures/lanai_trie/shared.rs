// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle over a Lanai Trie.
//!
//! Matching walks many nodes without any per-node synchronisation, so the
//! whole trie sits behind one reader/writer lock: mutations take the write
//! lock, lookups share the read lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{LanaiTrie, LanaiTrieConfig, WordEntry};

/// Cloneable, shareable handle to a single [`LanaiTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedLanaiTrie {
    inner: Arc<RwLock<LanaiTrie>>,
}

impl SharedLanaiTrie {
    /// Creates a handle over a new empty trie.
    pub fn new() -> Self {
        Self::from_trie(LanaiTrie::new())
    }

    /// Creates a handle over a new empty trie with the given configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self::from_trie(LanaiTrie::with_config(config))
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a word under the write lock. See [`LanaiTrie::insert`].
    pub fn insert<K: AsRef<str>>(&self, word: K, frequency: u64) -> bool {
        self.inner.write().insert(word, frequency)
    }

    /// Removes a word under the write lock. See [`LanaiTrie::delete`].
    pub fn delete<K: AsRef<str>>(&self, word: K) -> bool {
        self.inner.write().delete(word)
    }

    /// Overwrites a frequency under the write lock.
    pub fn set_frequency<K: AsRef<str>>(&self, word: K, frequency: u64) -> Option<u64> {
        self.inner.write().set_frequency(word, frequency)
    }

    /// Replaces the dictionary under the write lock.
    pub fn load_entries<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = WordEntry>,
    {
        self.inner.write().load_entries(entries)
    }

    /// Exact lookup under the read lock.
    pub fn search<K: AsRef<str>>(&self, word: K) -> bool {
        self.inner.read().search(word)
    }

    /// Wildcard matching under the read lock.
    pub fn find_all_matches_with_frequency<P: AsRef<str>>(&self, pattern: P) -> Vec<WordEntry> {
        self.inner.read().find_all_matches_with_frequency(pattern)
    }

    /// Best wildcard match under the read lock.
    pub fn find_best_match<P: AsRef<str>>(&self, pattern: P) -> Option<String> {
        self.inner.read().find_best_match(pattern)
    }

    /// Ranked export under the read lock.
    pub fn export_entries(&self) -> Vec<WordEntry> {
        self.inner.read().export_entries()
    }

    /// Number of words stored.
    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Holds the read lock for a batch of lookups.
    pub fn read(&self) -> RwLockReadGuard<'_, LanaiTrie> {
        self.inner.read()
    }

    /// Holds the write lock for a batch of mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, LanaiTrie> {
        self.inner.write()
    }
}

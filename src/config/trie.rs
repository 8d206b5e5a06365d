//! Trie configuration module.
//!
//! This module defines how the dictionary trie is built: which character acts
//! as the single-character wildcard and how long a stored word may be.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{
    LanaiTrieConfig, DEFAULT_MAX_WORD_LENGTH, DEFAULT_WILDCARD,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Wildcard marker; must be exactly one non-alphanumeric, non-space character
    pub wildcard: String,

    /// Longest word accepted into the dictionary, in characters
    pub max_word_length: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD.to_string(),
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl TrieConfig {
    /// The wildcard as a character, or the default if the string is not a
    /// single usable character. Validation rejects that case up front.
    pub fn wildcard_char(&self) -> char {
        let mut chars = self.wildcard.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() && !c.is_whitespace() => c,
            _ => DEFAULT_WILDCARD,
        }
    }

    /// Builds the options for a new trie.
    pub fn to_trie_config(&self) -> LanaiTrieConfig {
        LanaiTrieConfig::new()
            .wildcard(self.wildcard_char())
            .max_word_length(self.max_word_length)
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        let mut chars = self.wildcard.chars();
        let wildcard = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "wildcard must be exactly one character, got '{}'",
                    self.wildcard
                )))
            }
        };

        if wildcard.is_whitespace() || wildcard.is_alphanumeric() {
            return Err(ConfigError::ValidationError(format!(
                "wildcard '{wildcard}' must not be a letter, digit or whitespace"
            )));
        }

        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

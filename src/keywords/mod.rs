//! Keyword store: the file side of the dictionary.
//!
//! A keyword list holds one `word,frequency` entry per line. The frequency is
//! optional and defaults to 1; blank lines are ignored. This module parses and
//! formats that text and moves it between disk and a [`LanaiTrie`]. The trie
//! itself never touches the filesystem.
//!
//! Loading is all-or-nothing: the file is read and every line parsed before
//! the trie is cleared and rebuilt, so a failed load leaves the trie as it
//! was.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::data_structures::lanai_trie::{LanaiTrie, WordEntry};
use crate::error::keywords::KeywordStoreError;

/// Result type for keyword store operations.
pub type KeywordResult<T> = Result<T, KeywordStoreError>;

/// Separator between word and frequency.
const FIELD_SEPARATOR: char = ',';

/// A parsed entry and the line it came from.
struct NumberedEntry<'a> {
    line: usize,
    content: &'a str,
    entry: WordEntry,
}

/// Parses keyword-list text into entries, in file order.
///
/// Lines are trimmed and split at the first comma. Anything after a second
/// comma is ignored, as is a line whose word part is empty.
///
/// # Errors
///
/// * `KeywordStoreError::Malformed` - If a frequency is not a positive integer.
pub fn parse_keyword_list(text: &str) -> KeywordResult<Vec<WordEntry>> {
    Ok(parse_numbered(text)?
        .into_iter()
        .map(|numbered| numbered.entry)
        .collect())
}

fn parse_numbered(text: &str) -> KeywordResult<Vec<NumberedEntry<'_>>> {
    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (word, frequency) = match line.split_once(FIELD_SEPARATOR) {
            Some((word, rest)) => {
                let field = rest.split(FIELD_SEPARATOR).next().unwrap_or_default().trim();
                (word.trim(), parse_frequency(field, index + 1, line)?)
            }
            None => (line, 1),
        };

        if !word.is_empty() {
            entries.push(NumberedEntry {
                line: index + 1,
                content: line,
                entry: WordEntry::new(word, frequency),
            });
        }
    }

    Ok(entries)
}

fn parse_frequency(field: &str, line: usize, content: &str) -> KeywordResult<u64> {
    let malformed = |reason: String| KeywordStoreError::Malformed {
        line,
        content: content.to_string(),
        reason,
    };

    match field.parse::<u64>() {
        Ok(0) => Err(malformed("frequency must be greater than 0".to_string())),
        Ok(frequency) => Ok(frequency),
        Err(e) => Err(malformed(format!("invalid frequency '{field}': {e}"))),
    }
}

/// Formats entries as keyword-list text, one `word,frequency` line each.
pub fn format_keyword_list(entries: &[WordEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}{FIELD_SEPARATOR}{}\n", entry.word, entry.frequency))
        .collect()
}

/// Reads and parses a keyword file without touching any trie.
///
/// # Errors
///
/// * `KeywordStoreError::FileNotFound` - If the file does not exist.
/// * `KeywordStoreError::Read` - If the file cannot be read.
/// * `KeywordStoreError::Malformed` - If a line cannot be parsed.
pub fn read_keywords<P: AsRef<Path>>(path: P) -> KeywordResult<Vec<WordEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| KeywordStoreError::from_read(path, e))?;
    parse_keyword_list(&text)
}

/// Replaces the contents of `trie` with the keywords in a file.
///
/// Every entry is checked against the trie's limits before the trie is
/// cleared, so no entry is ever dropped silently.
///
/// # Returns
///
/// The number of distinct words in the trie after loading.
///
/// # Errors
///
/// Any error from [`read_keywords`], or `KeywordStoreError::Malformed` for
/// the first entry the trie would refuse (for example an over-long word).
/// The trie is unchanged in every error case.
pub fn load_keywords<P: AsRef<Path>>(path: P, trie: &mut LanaiTrie) -> KeywordResult<usize> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| KeywordStoreError::from_read(path, e))?;
    let entries = parse_numbered(&text)?;

    for numbered in &entries {
        if let Err(reason) = trie.check_word(&numbered.entry.word) {
            warn!(
                path = %path.display(),
                line = numbered.line,
                %reason,
                "Keyword file holds an entry the dictionary cannot store"
            );
            return Err(KeywordStoreError::Malformed {
                line: numbered.line,
                content: numbered.content.to_string(),
                reason: reason.to_string(),
            });
        }
    }

    let count = trie.load_entries(entries.into_iter().map(|numbered| numbered.entry));

    info!(path = %path.display(), words = count, "Loaded keywords");
    Ok(count)
}

/// Writes every word in `trie` to a keyword file, in ranking order.
///
/// # Returns
///
/// The number of entries written.
pub fn save_keywords<P: AsRef<Path>>(path: P, trie: &LanaiTrie) -> KeywordResult<usize> {
    let path = path.as_ref();
    let entries = trie.export_entries();
    write_file(path, &format_keyword_list(&entries))?;

    info!(path = %path.display(), words = entries.len(), "Saved keywords");
    Ok(entries.len())
}

/// Writes the human-readable tree rendering of `trie` to a file.
pub fn save_tree_dump<P: AsRef<Path>>(path: P, trie: &LanaiTrie) -> KeywordResult<()> {
    let path = path.as_ref();
    write_file(path, &format!("{}\n", trie.tree_dump()))?;

    info!(path = %path.display(), "Saved trie dump");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> KeywordResult<()> {
    fs::write(path, contents).map_err(|source| KeywordStoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

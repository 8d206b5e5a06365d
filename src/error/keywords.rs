//! Keyword store error module.
//!
//! This module defines error types that may occur while reading, parsing and
//! writing keyword-list files and trie dumps.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during keyword file operations.
#[derive(Error, Debug)]
pub enum KeywordStoreError {
    /// Error when the file to read is missing.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Error when a file exists but cannot be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when a file cannot be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when a keyword line cannot be parsed.
    #[error("Malformed keyword entry on line {line} ('{content}'): {reason}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
        /// What was wrong with it
        reason: String,
    },
}

impl KeywordStoreError {
    /// Maps an IO error from reading `path`, singling out missing files.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Read { path, source }
        }
    }
}

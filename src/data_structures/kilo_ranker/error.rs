// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Kilo Ranker.

/// Errors that can occur while scoring a match set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RankingError {
    /// The match set was empty
    #[error("No matches to score")]
    EmptyMatches,

    /// The match set's frequencies sum to zero
    #[error("Cannot score {0} matches with a total frequency of zero")]
    ZeroTotalFrequency(usize),
}

/// Result type for Kilo Ranker operations
pub type RankingResult<T> = std::result::Result<T, RankingError>;

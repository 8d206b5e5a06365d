//! Olelo Library
//!
//! This library contains the core components of Olelo: a frequency-weighted
//! word dictionary and the tools that restore damaged words against it.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures::lanai_trie`: the dictionary trie (insert, delete,
//!   search, wildcard matching, enumeration)
//! - `data_structures::kilo_ranker`: pure post-processing of match sets
//! - `keywords`: keyword-list files and trie dumps
//! - `restore`: token-by-token restoration of damaged text
//! - `config` and `error`: the ambient configuration and error layers

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod keywords;
pub mod restore;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Olelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::OleloResult<()> {
    // Set up global error reporter with tracing
    let reporter = error::TracingErrorReporter::new();
    error::set_error_reporter(std::sync::Arc::new(reporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}

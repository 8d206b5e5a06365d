//! Restoration configuration module.
//!
//! This module defines how restored words are rendered in output text.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest number of decimal places printed for confidence scores.
const MAX_CONFIDENCE_PRECISION: usize = 6;

/// Restoration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Marker written before a best-match restoration
    pub best_match_open: String,

    /// Marker written after a best-match restoration
    pub best_match_close: String,

    /// Decimal places shown for confidence percentages
    pub confidence_precision: usize,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            best_match_open: "<".to_string(),
            best_match_close: ">".to_string(),
            confidence_precision: 2,
        }
    }
}

impl Validate for RestoreConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.best_match_open.chars().any(char::is_whitespace)
            || self.best_match_close.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::ValidationError(
                "best match markers must not contain whitespace".to_string(),
            ));
        }

        if self.confidence_precision > MAX_CONFIDENCE_PRECISION {
            return Err(ConfigError::ValueOutOfRange {
                key: "restore.confidence_precision".to_string(),
                message: format!("must be at most {MAX_CONFIDENCE_PRECISION}"),
            });
        }

        Ok(())
    }
}

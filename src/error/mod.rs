//! Error module for Olelo.
//!
//! This module provides the error handling framework for the whole crate:
//! a root error enum wrapping each component's error type, a context wrapper
//! for reporting, and a pluggable global reporter that logs through `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};
use thiserror::Error;

use crate::data_structures::kilo_ranker::RankingError;

pub mod config;
pub mod keywords;

/// Result type alias used throughout Olelo.
pub type OleloResult<T> = Result<T, OleloError>;

/// Core error enum for Olelo.
#[derive(Error, Debug)]
pub enum OleloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reading, parsing or writing keyword files.
    #[error("Keyword store error: {0}")]
    Keywords(#[from] keywords::KeywordStoreError),

    /// Errors scoring a match set.
    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: OleloError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: OleloError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    /// Creates a new tracing reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    ///
    /// # Arguments
    ///
    /// * `reporter` - The error reporter to use
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

/// Error reporting singleton instance.
static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Get the global error reporting instance.
pub fn get_error_reporting() -> RwLockReadGuard<'static, ErrorReporting> {
    ERROR_REPORTING.read()
}

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}

//! Error types for Newsgraph operations.
//!
//! This module provides the main error type [`NewsGraphError`] which wraps
//! the error conditions that can occur while decoding, laying out and
//! exporting a graph.

use std::io;

use thiserror::Error;

/// The main error type for Newsgraph operations.
///
/// The `Parse` variant keeps the source text next to the JSON error so that
/// front ends can point at the offending line and column.
#[derive(Debug, Error)]
pub enum NewsGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid graph payload: {err}")]
    Parse {
        err: serde_json::Error,
        src: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for NewsGraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl NewsGraphError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

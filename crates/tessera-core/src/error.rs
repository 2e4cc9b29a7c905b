//! Unified error system for Tessera
//!
//! A single error type covers every fallible boundary in the workspace.
//! Note that the combine algebra itself is total: merging two well-formed
//! deltas cannot fail, so errors only arise when parsing textual
//! identifiers and digests at the edges.

use serde::{Deserialize, Serialize};

/// Unified error type for all Tessera operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum TesseraError {
    /// Failed to parse a textual identifier or digest
    #[error("Parse error: {message}")]
    Parse {
        /// Error message describing the parse failure
        message: String,
    },
}

impl TesseraError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Standard Result type for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;

impl From<hex::FromHexError> for TesseraError {
    fn from(err: hex::FromHexError) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<uuid::Error> for TesseraError {
    fn from(err: uuid::Error) -> Self {
        Self::parse(err.to_string())
    }
}

//! # Error Types
//!
//! Defines error types raised when parsing shared primitives.

use thiserror::Error;

/// Errors that can occur when constructing primitives from external text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Input was not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match the target type.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

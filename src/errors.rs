// ABOUTME: Error types for exercise data model construction and string decoding
// ABOUTME: The parse path itself is infallible; errors cover checked constructors only
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Types
//!
//! Parsing free text never fails by design - malformed input yields a
//! low-confidence result instead of an error. The only fallible surfaces are
//! checked model constructors (an inverted rep range) and decoding enum
//! string forms stored by callers.

use thiserror::Error;

/// Errors from exercise data model construction and decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseDataError {
    /// A rep range was constructed with `min >= max`
    #[error("invalid rep range: min {min} must be less than max {max}")]
    InvalidRepsRange {
        /// Lower bound supplied by the caller
        min: u32,
        /// Upper bound supplied by the caller
        max: u32,
    },

    /// A stored parsing status string did not match any known variant
    #[error("unknown parsing status: {0}")]
    UnknownParsingStatus(String),

    /// A stored field name did not match any known exercise field
    #[error("unknown exercise field: {0}")]
    UnknownField(String),
}

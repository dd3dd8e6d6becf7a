// ABOUTME: Pattern-driven parsing engine for AI-generated exercise descriptions
// ABOUTME: Extracts typed fields with calibrated confidence and correction suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Exercise Parser
//!
//! Converts free-text exercise descriptions emitted by an upstream workout
//! generator (for example `"4 sets x 8 reps per arm, rest 60s"`) into
//! structured, typed fields with a calibrated confidence score, and proposes
//! corrections when text was mis-distributed across fields.
//!
//! ## Modules
//!
//! - **normalize**: pure text cleanup applied before pattern matching
//! - **patterns**: ordered, immutable regex tables for sets/reps and rest
//! - **parser**: orchestrates normalization, pattern application, note
//!   extraction, and confidence aggregation
//! - **validation**: heuristic checks over stored exercises (field bleed,
//!   swap detection, range sanity) producing issues/warnings/suggestions
//! - **suggestions**: conflict-resolved suggestion application
//! - **formatters**: canonical human-readable rendering
//!
//! ## Example
//!
//! ```rust
//! use exercise_parser::{format_parsed_data, parse_exercise_text};
//!
//! let result = parse_exercise_text("4 sets x 8 reps per arm, rest 60 seconds");
//! assert_eq!(result.parsed.sets, Some(4));
//! assert_eq!(result.parsed.rest_period_seconds, Some(60));
//! let canonical = format_parsed_data(&result.parsed);
//! assert!(canonical.starts_with("4 sets \u{d7} 8 reps"));
//! ```
//!
//! Every operation is synchronous, pure, and deterministic: no I/O, no
//! shared state, no panics on malformed input. Callers re-run parsing and
//! validation on every debounced edit, so identical input always yields an
//! identical result.

/// Named thresholds and confidence caps
pub mod constants;

/// Error types for model construction and string decoding
pub mod errors;

/// Canonical human-readable rendering of parsed data
pub mod formatters;

/// Data model: exercises, parse results, suggestions, validation results
pub mod models;

/// Text normalization applied before pattern matching
pub mod normalize;

/// Ordered regex pattern tables for sets/reps and rest extraction
pub mod patterns;

/// Free-text exercise description parsing
pub mod parser;

/// Conflict-resolved application of accepted suggestions
pub mod suggestions;

/// Heuristic validation of stored exercises
pub mod validation;

pub use errors::ExerciseDataError;
pub use formatters::format_parsed_data;
pub use models::{
    Exercise, ExerciseField, FieldSuggestion, FieldValidationResult, FieldValue, MatchedPattern,
    ParsedExerciseData, ParsingResult, ParsingStatus, RepsValue, SuggestionSource,
};
pub use parser::{parse_exercise_text, ExerciseDataParser};
pub use suggestions::{apply_suggestions, review_status};
pub use validation::{validate_exercise, FieldValidator, ValidationConfig};

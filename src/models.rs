// ABOUTME: Data model for parsed exercise data, suggestions, and validation results
// ABOUTME: Closed enums replace stringly-typed field keys so handling is exhaustive
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Exercise Data Model
//!
//! Types exchanged between the parsing engine and its callers:
//!
//! - [`ParsedExerciseData`] / [`ParsingResult`] - output of text parsing
//! - [`FieldSuggestion`] - a proposed correction awaiting user acceptance
//! - [`FieldValidationResult`] - issues, warnings, and suggestions for a
//!   stored [`Exercise`]
//! - [`Exercise`] - the caller-owned record the engine reads and returns
//!   modified copies of; it is never mutated in place
//!
//! Field identity and values travel as the closed enums [`ExerciseField`] and
//! [`FieldValue`] rather than as dynamic string keys.

use crate::errors::ExerciseDataError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Field Identity
// ============================================================================

/// The four structured fields a suggestion can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseField {
    /// Number of sets
    Sets,
    /// Repetitions per set
    Reps,
    /// Rest period between sets, in seconds
    RestPeriod,
    /// Free-form instruction notes
    Notes,
}

impl ExerciseField {
    /// Storage/API string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sets => "sets",
            Self::Reps => "reps",
            Self::RestPeriod => "rest_period",
            Self::Notes => "notes",
        }
    }

    /// Decode from a stored string form
    ///
    /// # Errors
    /// Returns [`ExerciseDataError::UnknownField`] for unrecognized input.
    pub fn parse(s: &str) -> Result<Self, ExerciseDataError> {
        match s.trim().to_lowercase().as_str() {
            "sets" => Ok(Self::Sets),
            "reps" => Ok(Self::Reps),
            "rest_period" | "rest" => Ok(Self::RestPeriod),
            "notes" => Ok(Self::Notes),
            other => Err(ExerciseDataError::UnknownField(other.to_owned())),
        }
    }
}

impl fmt::Display for ExerciseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Reps
// ============================================================================

/// A repetition prescription: a plain count, an inclusive range, or raw text
///
/// `Text` carries values the engine could not decode structurally (including
/// special prescriptions such as "amrap" or "to failure"); the validator
/// inspects it for field bleed and format problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepsValue {
    /// Fixed repetition count
    Count(u32),
    /// Inclusive `min`-`max` range
    Range {
        /// Lower bound (strictly less than `max` when built via [`Self::range`])
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// Undecoded text, kept verbatim for validation
    Text(String),
}

impl RepsValue {
    /// Build a checked rep range
    ///
    /// # Errors
    /// Returns [`ExerciseDataError::InvalidRepsRange`] when `min >= max`.
    pub const fn range(min: u32, max: u32) -> Result<Self, ExerciseDataError> {
        if min < max {
            Ok(Self::Range { min, max })
        } else {
            Err(ExerciseDataError::InvalidRepsRange { min, max })
        }
    }

    /// Lenient structural decoder; never fails
    ///
    /// Plain digits become [`Self::Count`], `N-M` with `N < M` becomes
    /// [`Self::Range`], and everything else is preserved as [`Self::Text`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Ok(count) = trimmed.parse::<u32>() {
            return Self::Count(count);
        }
        if let Some((lo, hi)) = trimmed.split_once('-') {
            if let (Ok(min), Ok(max)) = (lo.trim().parse::<u32>(), hi.trim().parse::<u32>()) {
                if min < max {
                    return Self::Range { min, max };
                }
            }
        }
        Self::Text(trimmed.to_owned())
    }

    /// Numeric count, if this value is a plain count
    #[must_use]
    pub const fn as_count(&self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Range { .. } | Self::Text(_) => None,
        }
    }

    /// Whether this value carries no usable data (zero count or blank text)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Count(n) => *n == 0,
            Self::Range { .. } => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for RepsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// A typed value destined for (or read from) one exercise field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Number of sets
    Sets(u32),
    /// Repetition prescription
    Reps(RepsValue),
    /// Rest period in seconds
    RestPeriod(u32),
    /// Instruction notes
    Notes(String),
}

impl FieldValue {
    /// The field this value belongs to
    #[must_use]
    pub const fn field(&self) -> ExerciseField {
        match self {
            Self::Sets(_) => ExerciseField::Sets,
            Self::Reps(_) => ExerciseField::Reps,
            Self::RestPeriod(_) => ExerciseField::RestPeriod,
            Self::Notes(_) => ExerciseField::Notes,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sets(n) | Self::RestPeriod(n) => write!(f, "{n}"),
            Self::Reps(reps) => write!(f, "{reps}"),
            Self::Notes(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// Suggestions
// ============================================================================

/// Which heuristic or analysis produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// General heuristic analysis of parsed values
    HeuristicAnalysis,
    /// A library pattern matched inside an already-stored value
    PatternDetection,
    /// Structural analysis of a single field's content
    FieldAnalysis,
    /// Sets and reps appear transposed
    SwapDetection,
    /// Structured data recovered from the exercise name
    NameAnalysis,
    /// Produced automatically while parsing the original description
    AutoParsing,
    /// Free-text scan of a field's content
    TextAnalysis,
    /// Fallback default for an apparently unset field
    DefaultSuggestion,
}

impl SuggestionSource {
    /// Storage/API string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HeuristicAnalysis => "heuristic_analysis",
            Self::PatternDetection => "pattern_detection",
            Self::FieldAnalysis => "field_analysis",
            Self::SwapDetection => "swap_detection",
            Self::NameAnalysis => "name_analysis",
            Self::AutoParsing => "auto_parsing",
            Self::TextAnalysis => "text_analysis",
            Self::DefaultSuggestion => "default_suggestion",
        }
    }
}

/// A proposed field correction requiring explicit user acceptance
///
/// Ephemeral: produced by validation, consumed by
/// [`apply_suggestions`](crate::suggestions::apply_suggestions), never
/// persisted. Dismissed/shown lifecycle state belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    /// Field the correction targets
    pub field: ExerciseField,
    /// Value currently stored in that field, if any
    pub current_value: Option<FieldValue>,
    /// Proposed replacement value
    pub suggested_value: FieldValue,
    /// Certainty that the proposed value is correct, in [0, 1]
    pub confidence: f64,
    /// Human-readable explanation for the suggestion chip
    pub reason: String,
    /// Heuristic that produced this suggestion
    pub source: SuggestionSource,
}

impl FieldSuggestion {
    /// One-line summary suitable for a suggestion chip
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{}: {} \u{2192} {}",
            self.reason,
            self.current_value
                .as_ref()
                .map_or_else(|| "(empty)".to_owned(), ToString::to_string),
            self.suggested_value
        )
    }
}

// ============================================================================
// Parse Output
// ============================================================================

/// Structured fields extracted from one exercise description
///
/// Owned exclusively by the parse call that created it; treat as immutable
/// once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExerciseData {
    /// Number of sets, when a pattern claimed it
    pub sets: Option<u32>,
    /// Repetition prescription, when a pattern claimed it
    pub reps: Option<RepsValue>,
    /// Rest period in seconds, when a rest pattern matched
    pub rest_period_seconds: Option<u32>,
    /// Instruction notes recovered from the text
    pub notes: Option<String>,
    /// The input text, verbatim
    pub original_text: String,
    /// Mean confidence of the patterns that contributed fields, in [0, 1]
    pub confidence: f64,
}

impl ParsedExerciseData {
    /// Empty parse for the given input (no fields, zero confidence)
    #[must_use]
    pub fn empty(original_text: &str) -> Self {
        Self {
            sets: None,
            reps: None,
            rest_period_seconds: None,
            notes: None,
            original_text: original_text.to_owned(),
            confidence: 0.0,
        }
    }

    /// Whether no field was extracted at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sets.is_none()
            && self.reps.is_none()
            && self.rest_period_seconds.is_none()
            && self.notes.is_none()
    }
}

/// A library pattern that fired during parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPattern {
    /// Stable pattern name from the library table
    pub name: String,
    /// The pattern's table confidence
    pub confidence: f64,
}

/// Full output of [`parse_exercise_text`](crate::parser::parse_exercise_text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingResult {
    /// Extracted structured fields
    pub parsed: ParsedExerciseData,
    /// Overall parse confidence, in [0, 1]
    pub confidence: f64,
    /// Patterns that matched, in table order
    pub matched_patterns: Vec<MatchedPattern>,
    /// Corrections proposed by parse-time heuristics
    pub suggestions: Vec<FieldSuggestion>,
    /// Whether the result needs human review before trusting
    pub has_issues: bool,
}

impl ParsingResult {
    /// Result for blank input: nothing parsed, nothing to review
    #[must_use]
    pub fn empty(original_text: &str) -> Self {
        Self {
            parsed: ParsedExerciseData::empty(original_text),
            confidence: 0.0,
            matched_patterns: Vec::new(),
            suggestions: Vec::new(),
            has_issues: false,
        }
    }
}

// ============================================================================
// Validation Output
// ============================================================================

/// Outcome of validating a stored [`Exercise`]
///
/// Issues block saving; warnings inform; suggestions propose corrections the
/// user may accept or dismiss independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValidationResult {
    /// True when no blocking issue was found
    pub is_valid: bool,
    /// True when at least one warning was raised
    pub has_warnings: bool,
    /// Proposed corrections, independently acceptable
    pub suggestions: Vec<FieldSuggestion>,
    /// Blocking correctness problems
    pub issues: Vec<String>,
    /// Non-blocking signals
    pub warnings: Vec<String>,
    /// Minimum confidence implied by any triggered heuristic, in [0, 1]
    pub confidence: f64,
}

// ============================================================================
// Exercise
// ============================================================================

/// Provenance and trust of an exercise's structured fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsingStatus {
    /// Entered or last edited directly by the user
    #[default]
    Manual,
    /// Populated by the parsing engine or applied suggestions
    Parsed,
    /// Parsed, but validation still reports issues
    NeedsReview,
}

impl ParsingStatus {
    /// Storage/API string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Parsed => "parsed",
            Self::NeedsReview => "needs_review",
        }
    }

    /// Decode from a stored string form
    ///
    /// # Errors
    /// Returns [`ExerciseDataError::UnknownParsingStatus`] for unrecognized
    /// input.
    pub fn parse(s: &str) -> Result<Self, ExerciseDataError> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "parsed" => Ok(Self::Parsed),
            "needs_review" | "needsreview" => Ok(Self::NeedsReview),
            other => Err(ExerciseDataError::UnknownParsingStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for ParsingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-owned exercise record
///
/// The engine only reads this and returns modified copies; form state,
/// persistence, and the manual-edit status reset stay with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Caller-assigned identifier
    pub id: String,
    /// Exercise name as displayed
    pub name: String,
    /// Number of sets (0 means unset)
    pub sets: u32,
    /// Repetition prescription
    pub reps: RepsValue,
    /// Rest period between sets, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_period_seconds: Option<u32>,
    /// Free-form instruction notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// The upstream description this exercise was parsed from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_description: Option<String>,
    /// Provenance of the structured fields
    #[serde(default)]
    pub parsing_status: ParsingStatus,
    /// Confidence recorded by the last parse/apply, in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsing_confidence: Option<f64>,
}

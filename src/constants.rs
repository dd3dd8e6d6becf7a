// ABOUTME: Named thresholds and confidence caps for parsing and validation
// ABOUTME: Single source of truth so heuristics never embed magic numbers inline
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Overall parse confidence below which a result is flagged for review
pub const REVIEW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Exercise-pattern confidence at which later, weaker patterns stop running
pub const EARLY_STOP_CONFIDENCE: f64 = 0.9;

/// Largest sets count considered plausible for a single exercise
pub const MAX_REASONABLE_SETS: u32 = 20;

/// Fallback sets count suggested when sets look unset but reps carry structure
pub const DEFAULT_SETS: u32 = 3;

/// Largest rep count considered plausible for a single set
pub const MAX_REASONABLE_REPS: u32 = 100;

/// Rest periods above this many seconds draw a warning (10 minutes)
pub const MAX_REASONABLE_REST_SECONDS: u32 = 600;

/// Numeric reps below this value make a high sets count look like a swap
pub const SWAP_REPS_THRESHOLD: u32 = 10;

/// Exercise names longer than this are scanned for leaked sets/reps data
pub const LONG_NAME_THRESHOLD: usize = 100;

/// Minimum parse confidence for name-derived suggestions to surface
pub const NAME_PARSE_MIN_CONFIDENCE: f64 = 0.5;

/// Scale applied to confidences of suggestions recovered from the name field
pub const NAME_CONFIDENCE_SCALE: f64 = 0.8;

/// Leftover text shorter than this is noise, not a note
pub const MIN_NOTE_LEFTOVER_LEN: usize = 3;

/// Confidence for the two split suggestions emitted on sets-in-reps bleed
pub const FIELD_BLEED_CONFIDENCE: f64 = 0.95;

/// Aggregate confidence cap once field bleed is detected
pub const FIELD_BLEED_CONFIDENCE_CAP: f64 = 0.3;

/// Confidence for a rest period recovered from the reps field
pub const REST_IN_REPS_CONFIDENCE: f64 = 0.8;

/// Confidence for the suggestion defaulting sets to [`DEFAULT_SETS`]
pub const DEFAULT_SETS_CONFIDENCE: f64 = 0.6;

/// Confidence for each direction of a sets/reps swap suggestion
pub const SWAP_CONFIDENCE: f64 = 0.7;

/// Aggregate confidence cap for a reps string in no recognized format
pub const UNRECOGNIZED_REPS_CONFIDENCE_CAP: f64 = 0.5;

/// Aggregate confidence cap when neither sets nor reps hold any data
pub const MISSING_DATA_CONFIDENCE_CAP: f64 = 0.2;

// ABOUTME: Heuristic validation of stored exercises producing issues, warnings, suggestions
// ABOUTME: Detects field bleed, swapped sets/reps, range problems, and missing data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Field Validation
//!
//! Re-examines an already-populated [`Exercise`] independently of the text it
//! was parsed from, to catch drift and mis-entry. Seven heuristics run
//! independently (none are mutually exclusive):
//!
//! 1. field-bleed detection (a full set/rep scheme stored inside reps)
//! 2. rest-period data stored inside reps
//! 3. sets range sanity, including the sets/reps swap check
//! 4. reps range and format sanity
//! 5. rest period sanity
//! 6. overflow of workout data into the exercise name
//! 7. missing data
//!
//! Outcomes are split into blocking **issues**, non-blocking **warnings**,
//! and independently acceptable **suggestions**. The aggregate confidence is
//! the minimum cap any triggered heuristic implies (1.0 when none trigger).

use crate::constants::{
    DEFAULT_SETS, DEFAULT_SETS_CONFIDENCE, FIELD_BLEED_CONFIDENCE, FIELD_BLEED_CONFIDENCE_CAP,
    LONG_NAME_THRESHOLD, MAX_REASONABLE_REPS, MAX_REASONABLE_REST_SECONDS, MAX_REASONABLE_SETS,
    MISSING_DATA_CONFIDENCE_CAP, NAME_CONFIDENCE_SCALE, NAME_PARSE_MIN_CONFIDENCE,
    REST_IN_REPS_CONFIDENCE, SWAP_CONFIDENCE, SWAP_REPS_THRESHOLD,
    UNRECOGNIZED_REPS_CONFIDENCE_CAP,
};
use crate::models::{
    Exercise, ExerciseField, FieldSuggestion, FieldValidationResult, FieldValue,
    ParsedExerciseData, RepsValue, SuggestionSource,
};
use crate::parser::parse_exercise_text;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A full set/rep scheme embedded in a reps string
static EMBEDDED_SCHEME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*sets?\s*[x×*]\s*(\d+)(?:\s*-\s*(\d+))?\s*reps?\b").ok()
});

/// Rest seconds embedded in a reps string
static EMBEDDED_REST_SECONDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:seconds?|secs?|s)\b").ok());

/// Rest minutes embedded in a reps string
static EMBEDDED_REST_MINUTES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:minutes?|mins?)\b").ok());

/// A reps string of the form `N-M`
static TEXT_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").ok());

/// Special rep prescriptions accepted without warning
static SPECIAL_REPS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:max|amrap|\d+\+|to failure)$").ok());

/// Words in a reps string that indicate rest-period bleed
const REST_INDICATORS: &[&str] = &["rest", "second", "sec", "minute", "min"];

// ============================================================================
// Configuration
// ============================================================================

/// Thresholds driving the validation heuristics
///
/// Defaults match the engine's calibrated values; callers may deserialize an
/// override and inject it via [`FieldValidator::with_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Sets counts above this draw a warning and the swap check
    pub max_sets: u32,
    /// Rep counts above this draw a warning
    pub max_reps: u32,
    /// Rest periods above this many seconds draw a warning
    pub max_rest_seconds: u32,
    /// Sets value suggested when sets look unset but reps carry structure
    pub default_sets: u32,
    /// Numeric reps below this make a high sets count look transposed
    pub swap_reps_threshold: u32,
    /// Names longer than this are scanned for leaked workout data
    pub long_name_threshold: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_sets: MAX_REASONABLE_SETS,
            max_reps: MAX_REASONABLE_REPS,
            max_rest_seconds: MAX_REASONABLE_REST_SECONDS,
            default_sets: DEFAULT_SETS,
            swap_reps_threshold: SWAP_REPS_THRESHOLD,
            long_name_threshold: LONG_NAME_THRESHOLD,
        }
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Heuristic validator for stored exercises
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    config: ValidationConfig,
}

impl FieldValidator {
    /// Validator with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with caller-supplied thresholds
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a stored exercise; side-effect free, returns fresh objects
    #[must_use]
    pub fn validate(&self, exercise: &Exercise) -> FieldValidationResult {
        let mut outcome = Outcome::default();

        self.check_field_bleed(exercise, &mut outcome);
        self.check_rest_in_reps(exercise, &mut outcome);
        self.check_sets_range(exercise, &mut outcome);
        self.check_reps_range(exercise, &mut outcome);
        self.check_rest_sanity(exercise, &mut outcome);
        self.check_name_overflow(exercise, &mut outcome);
        self.check_missing_data(exercise, &mut outcome);

        if outcome.confidence < 1.0 {
            warn!(
                exercise_id = exercise.id.as_str(),
                confidence = outcome.confidence,
                "validation capped exercise confidence"
            );
        }

        FieldValidationResult {
            is_valid: outcome.issues.is_empty(),
            has_warnings: !outcome.warnings.is_empty(),
            suggestions: outcome.suggestions,
            issues: outcome.issues,
            warnings: outcome.warnings,
            confidence: outcome.confidence,
        }
    }

    /// Heuristic 1: a full set/rep scheme stored inside the reps field
    fn check_field_bleed(&self, exercise: &Exercise, outcome: &mut Outcome) {
        let RepsValue::Text(text) = &exercise.reps else {
            return;
        };
        let Some(split) = split_embedded_scheme(text) else {
            return;
        };
        debug!(reps = text.as_str(), "sets data embedded in reps field");
        outcome
            .warnings
            .push("Reps field contains a full set/rep scheme".to_owned());
        outcome.suggestions.push(FieldSuggestion {
            field: ExerciseField::Sets,
            current_value: Some(FieldValue::Sets(exercise.sets)),
            suggested_value: FieldValue::Sets(split.sets),
            confidence: FIELD_BLEED_CONFIDENCE,
            reason: "Sets information found in reps field".to_owned(),
            source: SuggestionSource::FieldAnalysis,
        });
        outcome.suggestions.push(FieldSuggestion {
            field: ExerciseField::Reps,
            current_value: Some(FieldValue::Reps(exercise.reps.clone())),
            suggested_value: FieldValue::Reps(split.reps),
            confidence: FIELD_BLEED_CONFIDENCE,
            reason: "Reps value extracted from combined text".to_owned(),
            source: SuggestionSource::FieldAnalysis,
        });
        outcome.cap(FIELD_BLEED_CONFIDENCE_CAP);
    }

    /// Heuristic 2: rest-period data stored inside the reps field
    fn check_rest_in_reps(&self, exercise: &Exercise, outcome: &mut Outcome) {
        if exercise.rest_period_seconds.is_some() {
            return;
        }
        let RepsValue::Text(text) = &exercise.reps else {
            return;
        };
        let lowered = text.to_lowercase();
        if !REST_INDICATORS.iter().any(|word| lowered.contains(word)) {
            return;
        }
        let Some(seconds) = extract_embedded_rest(text) else {
            return;
        };
        outcome.suggestions.push(FieldSuggestion {
            field: ExerciseField::RestPeriod,
            current_value: None,
            suggested_value: FieldValue::RestPeriod(seconds),
            confidence: REST_IN_REPS_CONFIDENCE,
            reason: "Rest period found in reps field".to_owned(),
            source: SuggestionSource::TextAnalysis,
        });
    }

    /// Heuristic 3: sets range sanity and the sets/reps swap check
    fn check_sets_range(&self, exercise: &Exercise, outcome: &mut Outcome) {
        if exercise.sets < 1 {
            outcome.issues.push("Sets must be at least 1".to_owned());
            return;
        }
        if exercise.sets == 1 {
            if let RepsValue::Text(text) = &exercise.reps {
                // A full embedded scheme is the bleed heuristic's case; the
                // default-sets fallback covers other complex reps strings.
                if (text.contains(' ') || text.len() > 10) && split_embedded_scheme(text).is_none() {
                    outcome
                        .warnings
                        .push("Single set with a complex reps value".to_owned());
                    outcome.suggestions.push(FieldSuggestion {
                        field: ExerciseField::Sets,
                        current_value: Some(FieldValue::Sets(1)),
                        suggested_value: FieldValue::Sets(self.config.default_sets),
                        confidence: DEFAULT_SETS_CONFIDENCE,
                        reason: format!("Sets looks unset; defaulting to {}", self.config.default_sets),
                        source: SuggestionSource::DefaultSuggestion,
                    });
                }
            }
            return;
        }
        if exercise.sets > self.config.max_sets {
            outcome.warnings.push(format!(
                "Unusually high sets count: {}",
                exercise.sets
            ));
            if let Some(reps) = exercise.reps.as_count() {
                if reps < self.config.swap_reps_threshold {
                    outcome
                        .suggestions
                        .extend(swap_suggestions(exercise.sets, reps));
                }
            }
        }
    }

    /// Heuristic 4: reps range and format sanity
    fn check_reps_range(&self, exercise: &Exercise, outcome: &mut Outcome) {
        match &exercise.reps {
            RepsValue::Count(count) => {
                if *count < 1 {
                    outcome.issues.push("Reps must be at least 1".to_owned());
                } else if *count > self.config.max_reps {
                    outcome
                        .warnings
                        .push(format!("Unusually high rep count: {count}"));
                }
            }
            RepsValue::Range { min, max } => {
                if min >= max {
                    outcome
                        .issues
                        .push(format!("Inverted rep range: {min}-{max}"));
                } else if *max > self.config.max_reps {
                    outcome
                        .warnings
                        .push(format!("Unusually high rep range upper bound: {max}"));
                }
            }
            RepsValue::Text(text) => self.check_reps_text(text, outcome),
        }
    }

    fn check_reps_text(&self, text: &str, outcome: &mut Outcome) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            // Handled by the missing-data heuristic
            return;
        }
        if let Some(captures) = TEXT_RANGE.as_ref().and_then(|re| re.captures(trimmed)) {
            let bounds = (
                captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok()),
                captures.get(2).and_then(|m| m.as_str().parse::<u32>().ok()),
            );
            if let (Some(min), Some(max)) = bounds {
                if min >= max {
                    outcome
                        .issues
                        .push(format!("Inverted rep range: {min}-{max}"));
                } else if max > self.config.max_reps {
                    outcome
                        .warnings
                        .push(format!("Unusually high rep range upper bound: {max}"));
                }
                return;
            }
        }
        if trimmed.parse::<u32>().is_ok() {
            return;
        }
        if SPECIAL_REPS
            .as_ref()
            .is_some_and(|re| re.is_match(trimmed))
        {
            return;
        }
        outcome
            .warnings
            .push(format!("Unrecognized reps format: \"{trimmed}\""));
        outcome.cap(UNRECOGNIZED_REPS_CONFIDENCE_CAP);
    }

    /// Heuristic 5: rest period sanity (negative rest is unrepresentable)
    fn check_rest_sanity(&self, exercise: &Exercise, outcome: &mut Outcome) {
        if let Some(rest) = exercise.rest_period_seconds {
            if rest > self.config.max_rest_seconds {
                outcome
                    .warnings
                    .push(format!("Unusually long rest period: {rest}s"));
            }
        }
    }

    /// Heuristic 6: workout data leaked into an overlong exercise name
    fn check_name_overflow(&self, exercise: &Exercise, outcome: &mut Outcome) {
        if exercise.name.len() <= self.config.long_name_threshold {
            return;
        }
        let reparse = parse_exercise_text(&exercise.name);
        if reparse.confidence <= NAME_PARSE_MIN_CONFIDENCE {
            return;
        }
        debug!(
            confidence = reparse.confidence,
            "exercise name contains parseable workout data"
        );
        let scaled = reparse.confidence * NAME_CONFIDENCE_SCALE;
        if let Some(sets) = reparse.parsed.sets {
            outcome.suggestions.push(FieldSuggestion {
                field: ExerciseField::Sets,
                current_value: Some(FieldValue::Sets(exercise.sets)),
                suggested_value: FieldValue::Sets(sets),
                confidence: scaled,
                reason: "Sets information found in exercise name".to_owned(),
                source: SuggestionSource::NameAnalysis,
            });
        }
        if let Some(reps) = reparse.parsed.reps {
            outcome.suggestions.push(FieldSuggestion {
                field: ExerciseField::Reps,
                current_value: Some(FieldValue::Reps(exercise.reps.clone())),
                suggested_value: FieldValue::Reps(reps),
                confidence: scaled,
                reason: "Reps information found in exercise name".to_owned(),
                source: SuggestionSource::NameAnalysis,
            });
        }
    }

    /// Heuristic 7: neither sets nor reps carry any data
    fn check_missing_data(&self, exercise: &Exercise, outcome: &mut Outcome) {
        if exercise.sets == 0 && exercise.reps.is_empty() {
            outcome
                .warnings
                .push("Exercise has neither sets nor reps data".to_owned());
            outcome.cap(MISSING_DATA_CONFIDENCE_CAP);
        }
    }
}

/// Validate a stored exercise with default thresholds
#[must_use]
pub fn validate_exercise(exercise: &Exercise) -> FieldValidationResult {
    FieldValidator::new().validate(exercise)
}

// ============================================================================
// Shared Heuristics
// ============================================================================

/// Drift heuristics applied to a fresh parse (shared with the validator):
/// sets/reps swap and sets-embedded-in-reps detection.
pub(crate) fn parsed_data_suggestions(parsed: &ParsedExerciseData) -> Vec<FieldSuggestion> {
    let mut suggestions = Vec::new();

    if let Some(RepsValue::Text(text)) = &parsed.reps {
        if let Some(split) = split_embedded_scheme(text) {
            suggestions.push(FieldSuggestion {
                field: ExerciseField::Sets,
                current_value: parsed.sets.map(FieldValue::Sets),
                suggested_value: FieldValue::Sets(split.sets),
                confidence: FIELD_BLEED_CONFIDENCE,
                reason: "Sets information found in reps field".to_owned(),
                source: SuggestionSource::PatternDetection,
            });
            suggestions.push(FieldSuggestion {
                field: ExerciseField::Reps,
                current_value: Some(FieldValue::Reps(RepsValue::Text(text.clone()))),
                suggested_value: FieldValue::Reps(split.reps),
                confidence: FIELD_BLEED_CONFIDENCE,
                reason: "Reps value extracted from combined text".to_owned(),
                source: SuggestionSource::PatternDetection,
            });
        }
    }

    if let (Some(sets), Some(reps)) = (parsed.sets, parsed.reps.as_ref().and_then(RepsValue::as_count))
    {
        if sets > MAX_REASONABLE_SETS && reps < SWAP_REPS_THRESHOLD {
            suggestions.extend(swap_suggestions(sets, reps));
        }
    }

    suggestions
}

/// The two symmetric suggestions proposing a sets/reps swap
fn swap_suggestions(sets: u32, reps: u32) -> [FieldSuggestion; 2] {
    [
        FieldSuggestion {
            field: ExerciseField::Sets,
            current_value: Some(FieldValue::Sets(sets)),
            suggested_value: FieldValue::Sets(reps),
            confidence: SWAP_CONFIDENCE,
            reason: "Sets and reps appear to be swapped".to_owned(),
            source: SuggestionSource::SwapDetection,
        },
        FieldSuggestion {
            field: ExerciseField::Reps,
            current_value: Some(FieldValue::Reps(RepsValue::Count(reps))),
            suggested_value: FieldValue::Reps(RepsValue::Count(sets)),
            confidence: SWAP_CONFIDENCE,
            reason: "Sets and reps appear to be swapped".to_owned(),
            source: SuggestionSource::SwapDetection,
        },
    ]
}

/// A set/rep scheme recovered from inside another field's text
struct EmbeddedScheme {
    sets: u32,
    reps: RepsValue,
}

fn split_embedded_scheme(text: &str) -> Option<EmbeddedScheme> {
    let captures = EMBEDDED_SCHEME.as_ref()?.captures(text)?;
    let sets = captures.get(1)?.as_str().parse().ok()?;
    let lo: u32 = captures.get(2)?.as_str().parse().ok()?;
    let reps = match captures.get(3).and_then(|m| m.as_str().parse::<u32>().ok()) {
        Some(hi) => RepsValue::range(lo, hi).unwrap_or_else(|_| RepsValue::Text(format!("{lo}-{hi}"))),
        None => RepsValue::Count(lo),
    };
    Some(EmbeddedScheme { sets, reps })
}

fn extract_embedded_rest(text: &str) -> Option<u32> {
    if let Some(captures) = EMBEDDED_REST_SECONDS.as_ref().and_then(|re| re.captures(text)) {
        return captures.get(1)?.as_str().parse().ok();
    }
    let captures = EMBEDDED_REST_MINUTES.as_ref()?.captures(text)?;
    let minutes: f64 = captures.get(1)?.as_str().parse().ok()?;
    if minutes.is_finite() && minutes >= 0.0 {
        Some((minutes * 60.0).round() as u32)
    } else {
        None
    }
}

/// Mutable accumulation state for one validation pass
#[derive(Debug)]
struct Outcome {
    issues: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<FieldSuggestion>,
    confidence: f64,
}

impl Default for Outcome {
    fn default() -> Self {
        Self {
            issues: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            confidence: 1.0,
        }
    }
}

impl Outcome {
    /// Lower the aggregate confidence to `cap` if it is not already lower
    fn cap(&mut self, cap: f64) {
        self.confidence = self.confidence.min(cap);
    }
}

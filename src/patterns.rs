// ABOUTME: Ordered, immutable pattern tables for sets/reps and rest extraction
// ABOUTME: Most-specific, highest-confidence patterns first; ordering is a design contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Pattern Library
//!
//! Two ordered tables of `(regex, name, confidence, extractor)` entries:
//! exercise patterns (sets/reps) and rest patterns. Tables are static and
//! never mutated at runtime.
//!
//! Ordering matters: a fully-qualified phrase ("4 sets x 8 reps per arm")
//! must be claimed by the strong pattern before a weaker one ("8 reps") can
//! partially consume it. Patterns are case-insensitive and dash-tolerant so
//! they can be re-applied to the verbatim input when stripping matched spans
//! for note extraction.

use crate::models::RepsValue;
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::warn;

/// Partial fields extracted by a single exercise pattern
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternFields {
    /// Sets count, when the pattern captured one
    pub sets: Option<u32>,
    /// Reps prescription, when the pattern captured one
    pub reps: Option<RepsValue>,
}

/// One entry of the exercise (sets/reps) pattern table
pub struct ExercisePattern {
    /// Stable name reported in `matched_patterns`
    pub name: &'static str,
    /// Table confidence in (0, 1]
    pub confidence: f64,
    regex: &'static LazyLock<Option<Regex>>,
    extract: fn(&Captures<'_>) -> PatternFields,
}

impl ExercisePattern {
    /// Run this pattern against `text`, returning extracted fields on a match
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<PatternFields> {
        let caps = self.compiled()?.captures(text)?;
        Some((self.extract)(&caps))
    }

    /// Byte range of the first match in `text`, if any
    #[must_use]
    pub fn match_range(&self, text: &str) -> Option<Range<usize>> {
        self.compiled()?.find(text).map(|m| m.range())
    }

    fn compiled(&self) -> Option<&Regex> {
        let compiled = self.regex.as_ref();
        if compiled.is_none() {
            warn!(pattern = self.name, "exercise pattern failed to compile");
        }
        compiled
    }
}

/// One entry of the rest-period pattern table
pub struct RestPattern {
    /// Stable name reported in `matched_patterns`
    pub name: &'static str,
    /// Table confidence in (0, 1]
    pub confidence: f64,
    regex: &'static LazyLock<Option<Regex>>,
    extract: fn(&Captures<'_>) -> Option<u32>,
}

impl RestPattern {
    /// Run this pattern against `text`, returning rest seconds on a match
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<u32> {
        let caps = self.compiled()?.captures(text)?;
        (self.extract)(&caps)
    }

    /// Byte range of the first match in `text`, if any
    #[must_use]
    pub fn match_range(&self, text: &str) -> Option<Range<usize>> {
        self.compiled()?.find(text).map(|m| m.range())
    }

    fn compiled(&self) -> Option<&Regex> {
        let compiled = self.regex.as_ref();
        if compiled.is_none() {
            warn!(pattern = self.name, "rest pattern failed to compile");
        }
        compiled
    }
}

// ============================================================================
// Exercise Patterns
// ============================================================================

static SETS_X_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 4 sets x 8 reps, 4 sets × 8-12 reps, 3 set * 10 rep
    Regex::new(r"(?i)\b(\d+)\s*sets?\s*[x×*]\s*(\d+)(?:\s*[-–—]\s*(\d+))?\s*reps?\b").ok()
});

static SETS_OF_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 3 sets of 8-12 reps, 3 sets of 10
    Regex::new(r"(?i)\b(\d+)\s*sets?\s+of\s+(\d+)(?:\s*[-–—]\s*(\d+))?(?:\s*reps?)?\b").ok()
});

static ROUNDS_OF_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 rounds of 10 repetitions, 3 rounds of 12 reps
    Regex::new(r"(?i)\b(\d+)\s*rounds?\s+of\s+(\d+)\s*(?:repetitions?|reps?)\b").ok()
});

static SHORT_FORM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5x5, 3 × 12
    Regex::new(r"(?i)\b(\d+)\s*[x×]\s*(\d+)\b").ok()
});

static SETS_COMMA_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 3 sets, 12 reps each
    Regex::new(r"(?i)\b(\d+)\s*sets?\s*,\s*(\d+)\s*reps?(?:\s+each)?\b").ok()
});

static SETS_ONLY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*sets?\b").ok());

static REPS_ONLY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*reps?\b").ok());

static EXERCISE_TABLE: [ExercisePattern; 7] = [
    ExercisePattern {
        name: "sets_x_reps",
        confidence: 0.95,
        regex: &SETS_X_REPS,
        extract: extract_sets_and_reps,
    },
    ExercisePattern {
        name: "sets_of_reps",
        confidence: 0.90,
        regex: &SETS_OF_REPS,
        extract: extract_sets_and_reps,
    },
    ExercisePattern {
        name: "rounds_of_reps",
        confidence: 0.85,
        regex: &ROUNDS_OF_REPS,
        extract: extract_pair,
    },
    ExercisePattern {
        name: "short_form",
        confidence: 0.80,
        regex: &SHORT_FORM,
        extract: extract_pair,
    },
    ExercisePattern {
        name: "sets_comma_reps",
        confidence: 0.75,
        regex: &SETS_COMMA_REPS,
        extract: extract_pair,
    },
    ExercisePattern {
        name: "sets_only",
        confidence: 0.60,
        regex: &SETS_ONLY,
        extract: extract_sets_only,
    },
    ExercisePattern {
        name: "reps_only",
        confidence: 0.60,
        regex: &REPS_ONLY,
        extract: extract_reps_only,
    },
];

/// Exercise patterns, strongest first
#[must_use]
pub fn exercise_patterns() -> &'static [ExercisePattern] {
    &EXERCISE_TABLE
}

fn cap_u32(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

/// Sets in group 1, reps in group 2 with an optional range upper bound in 3
fn extract_sets_and_reps(caps: &Captures<'_>) -> PatternFields {
    let reps = match (cap_u32(caps, 2), cap_u32(caps, 3)) {
        (Some(lo), Some(hi)) => {
            // An inverted range is preserved as text so validation can flag it
            Some(RepsValue::range(lo, hi).unwrap_or_else(|_| RepsValue::Text(format!("{lo}-{hi}"))))
        }
        (Some(count), None) => Some(RepsValue::Count(count)),
        _ => None,
    };
    PatternFields {
        sets: cap_u32(caps, 1),
        reps,
    }
}

/// Sets in group 1, plain rep count in group 2
fn extract_pair(caps: &Captures<'_>) -> PatternFields {
    PatternFields {
        sets: cap_u32(caps, 1),
        reps: cap_u32(caps, 2).map(RepsValue::Count),
    }
}

fn extract_sets_only(caps: &Captures<'_>) -> PatternFields {
    PatternFields {
        sets: cap_u32(caps, 1),
        reps: None,
    }
}

fn extract_reps_only(caps: &Captures<'_>) -> PatternFields {
    PatternFields {
        sets: None,
        reps: cap_u32(caps, 1).map(RepsValue::Count),
    }
}

// ============================================================================
// Rest Patterns
// ============================================================================

static REST_SECONDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: rest 60 seconds, 90s, 45 secs rest.
    // The leading guard refuses a number preceded by a dash or digit so the
    // upper bound of "60-90 seconds rest" is left for the range pattern.
    Regex::new(r"(?i)(?:^|[^-–—\d])(?:rest\s*)?(\d+)\s*(?:seconds?|secs?|s)\b(?:\s*rest)?").ok()
});

static REST_MINUTES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: rest 2 minutes, 1.5 min rest
    Regex::new(r"(?i)(?:rest\s*)?(\d+(?:\.\d+)?)\s*(?:minutes?|mins?)\b(?:\s*rest)?").ok()
});

static REST_RANGE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 60-90 seconds rest, 30-45 secs of rest
    Regex::new(r"(?i)\b(\d+)\s*[-–—]\s*(\d+)\s*(?:seconds?|secs?|s)\s*(?:of\s+)?rest\b").ok()
});

static REST_TABLE: [RestPattern; 3] = [
    RestPattern {
        name: "rest_seconds",
        confidence: 0.90,
        regex: &REST_SECONDS,
        extract: extract_rest_seconds,
    },
    RestPattern {
        name: "rest_minutes",
        confidence: 0.85,
        regex: &REST_MINUTES,
        extract: extract_rest_minutes,
    },
    RestPattern {
        name: "rest_range",
        confidence: 0.70,
        regex: &REST_RANGE,
        extract: extract_rest_range,
    },
];

/// Rest patterns, strongest first
#[must_use]
pub fn rest_patterns() -> &'static [RestPattern] {
    &REST_TABLE
}

fn extract_rest_seconds(caps: &Captures<'_>) -> Option<u32> {
    cap_u32(caps, 1)
}

fn extract_rest_minutes(caps: &Captures<'_>) -> Option<u32> {
    let minutes: f64 = caps.get(1)?.as_str().parse().ok()?;
    if minutes.is_finite() && minutes >= 0.0 {
        Some((minutes * 60.0).round() as u32)
    } else {
        None
    }
}

fn extract_rest_range(caps: &Captures<'_>) -> Option<u32> {
    let lo = cap_u32(caps, 1)?;
    let hi = cap_u32(caps, 2)?;
    // Widen each bound before adding; the sum of two u32 captures can overflow
    Some(((f64::from(lo) + f64::from(hi)) / 2.0).round() as u32)
}

// ABOUTME: Exercise description parser orchestrating normalization, patterns, and notes
// ABOUTME: Produces a ParsingResult with calibrated confidence and parse-time suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Exercise Data Parser
//!
//! Turns one free-text exercise description into structured fields:
//!
//! 1. normalize the text;
//! 2. run the exercise pattern table in order, first match winning each
//!    field, stopping early once a high-confidence pattern fires;
//! 3. run the rest pattern table, taking the first match only;
//! 4. recover notes from instruction keywords and leftover text;
//! 5. aggregate confidence as the mean over contributing patterns and run
//!    the shared drift heuristics over the fresh parse.
//!
//! Parsing is pure and deterministic; callers re-run it on every debounced
//! edit, so identical input must yield identical output.

use crate::constants::{EARLY_STOP_CONFIDENCE, MIN_NOTE_LEFTOVER_LEN, REVIEW_CONFIDENCE_THRESHOLD};
use crate::models::{MatchedPattern, ParsedExerciseData, ParsingResult};
use crate::normalize::normalize;
use crate::patterns::{exercise_patterns, rest_patterns, ExercisePattern, RestPattern};
use crate::validation::parsed_data_suggestions;
use tracing::{debug, trace};

/// Instruction keywords whose containing clause is captured as a note
const NOTE_KEYWORDS: &[&str] = &[
    "per arm",
    "per leg",
    "per side",
    "each arm",
    "each leg",
    "each side",
    "amrap",
    "emom",
    "tempo",
    "superset",
    "drop set",
    "dropset",
    "to failure",
    "pause",
    "hold",
    "slow",
    "explosive",
    "alternating",
];

/// Pattern-driven parser for free-text exercise descriptions
///
/// Stateless; every call operates only on its input. Construct once and
/// reuse, or go through [`parse_exercise_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseDataParser;

impl ExerciseDataParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse one exercise description into structured fields
    ///
    /// Never fails: blank input short-circuits to an empty zero-confidence
    /// result, and unrecognized input yields an empty parse with
    /// `has_issues` unset only when nothing at all was claimed.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsingResult {
        if text.trim().is_empty() {
            return ParsingResult::empty(text);
        }

        let normalized = normalize(text);
        trace!(original = text, normalized = normalized.as_str(), "parsing exercise text");

        let mut parsed = ParsedExerciseData::empty(text);
        let mut matched_patterns = Vec::new();
        let mut contributing: Vec<f64> = Vec::new();
        let mut matched_exercise: Vec<&'static ExercisePattern> = Vec::new();
        let mut fired_rest: Option<&'static RestPattern> = None;

        for pattern in exercise_patterns() {
            let Some(fields) = pattern.apply(&normalized) else {
                continue;
            };
            matched_patterns.push(MatchedPattern {
                name: pattern.name.to_owned(),
                confidence: pattern.confidence,
            });
            // Every matched span is stripped from the note leftover, even
            // when an earlier entry already claimed the fields.
            matched_exercise.push(pattern);

            // First match wins per field; later table entries are never
            // stronger than earlier ones.
            let mut contributed = false;
            if parsed.sets.is_none() {
                if let Some(sets) = fields.sets {
                    parsed.sets = Some(sets);
                    contributed = true;
                }
            }
            if parsed.reps.is_none() {
                if let Some(reps) = fields.reps {
                    parsed.reps = Some(reps);
                    contributed = true;
                }
            }
            if contributed {
                debug!(
                    pattern = pattern.name,
                    confidence = pattern.confidence,
                    "exercise pattern contributed fields"
                );
                contributing.push(pattern.confidence);
            }

            if pattern.confidence >= EARLY_STOP_CONFIDENCE {
                debug!(pattern = pattern.name, "stopping after high-confidence match");
                break;
            }
        }

        // Rest extraction is single-valued: first table hit only.
        for pattern in rest_patterns() {
            if let Some(seconds) = pattern.apply(&normalized) {
                debug!(pattern = pattern.name, seconds, "rest pattern matched");
                parsed.rest_period_seconds = Some(seconds);
                matched_patterns.push(MatchedPattern {
                    name: pattern.name.to_owned(),
                    confidence: pattern.confidence,
                });
                contributing.push(pattern.confidence);
                fired_rest = Some(pattern);
                break;
            }
        }

        parsed.notes = extract_notes(text, &matched_exercise, fired_rest);

        let confidence = if contributing.is_empty() {
            0.0
        } else {
            contributing.iter().sum::<f64>() / contributing.len() as f64
        };
        parsed.confidence = confidence;

        let suggestions = parsed_data_suggestions(&parsed);
        let has_issues = confidence < REVIEW_CONFIDENCE_THRESHOLD || !suggestions.is_empty();

        ParsingResult {
            parsed,
            confidence,
            matched_patterns,
            suggestions,
            has_issues,
        }
    }
}

/// Parse one exercise description with a default parser
#[must_use]
pub fn parse_exercise_text(text: &str) -> ParsingResult {
    ExerciseDataParser::new().parse(text)
}

/// Recover notes from the verbatim text after removing all matched spans
///
/// Clauses of the leftover containing an instruction keyword are captured as
/// notes; other non-trivial leftover clauses become a note prefix. Works on
/// the original text so casing ("AMRAP") survives.
fn extract_notes(
    original: &str,
    matched_exercise: &[&ExercisePattern],
    fired_rest: Option<&RestPattern>,
) -> Option<String> {
    let mut scratch: Vec<char> = original.chars().collect();

    for pattern in matched_exercise {
        blank_range(&mut scratch, original, pattern.match_range(original));
    }
    if let Some(pattern) = fired_rest {
        blank_range(&mut scratch, original, pattern.match_range(original));
    }

    let stripped: String = scratch.into_iter().collect();

    let mut prefix_parts: Vec<&str> = Vec::new();
    let mut keyword_parts: Vec<&str> = Vec::new();
    for clause in stripped.split([',', '.', ';', '(', ')']) {
        let clause = clause.trim().trim_matches('-').trim();
        if clause.is_empty() {
            continue;
        }
        let lowered = clause.to_lowercase();
        if NOTE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            keyword_parts.push(clause);
        } else if clause.len() > MIN_NOTE_LEFTOVER_LEN {
            prefix_parts.push(clause);
        }
    }

    let parts: Vec<String> = prefix_parts
        .into_iter()
        .chain(keyword_parts)
        .map(collapse_spaces)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Overwrite a byte range of `original` with spaces in the char scratch copy
fn blank_range(scratch: &mut [char], original: &str, range: Option<std::ops::Range<usize>>) {
    let Some(range) = range else {
        return;
    };
    for (index, (byte_pos, _)) in original.char_indices().enumerate() {
        if range.contains(&byte_pos) {
            if let Some(slot) = scratch.get_mut(index) {
                *slot = ' ';
            }
        }
    }
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

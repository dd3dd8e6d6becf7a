// ABOUTME: Applies accepted field suggestions to an exercise with conflict resolution
// ABOUTME: Highest confidence wins per field; status and confidence are bookkept
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Suggestion Application
//!
//! Commits accepted [`FieldSuggestion`]s onto a copy of an [`Exercise`].
//! Suggestions are ranked by confidence and at most one is written per
//! field - the strongest. The input exercise is never mutated; callers
//! receive a fresh record with updated `parsing_status` bookkeeping.

use crate::models::{Exercise, FieldSuggestion, FieldValue, ParsingStatus};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Apply suggestions to a copy of `exercise`, strongest per field winning
///
/// Never fails. An empty suggestion list is a no-op returning an equivalent
/// copy. When at least one suggestion is applied, `parsing_status` becomes
/// [`ParsingStatus::Parsed`] and `parsing_confidence` is raised to the
/// maximum confidence among the applied suggestions (never lowered).
#[must_use]
pub fn apply_suggestions(exercise: &Exercise, suggestions: &[FieldSuggestion]) -> Exercise {
    let mut updated = exercise.clone();
    if suggestions.is_empty() {
        return updated;
    }

    let mut ranked: Vec<&FieldSuggestion> = suggestions.iter().collect();
    // Stable: ties keep caller order, so the first of equals wins its field.
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let mut written = HashSet::new();
    let mut max_applied: Option<f64> = None;

    for suggestion in ranked {
        if !written.insert(suggestion.field) {
            debug!(
                field = suggestion.field.as_str(),
                confidence = suggestion.confidence,
                "skipping suggestion for already-written field"
            );
            continue;
        }
        if suggestion.suggested_value.field() != suggestion.field {
            warn!(
                field = suggestion.field.as_str(),
                value_field = suggestion.suggested_value.field().as_str(),
                "suggestion value targets a different field; skipping"
            );
            written.remove(&suggestion.field);
            continue;
        }
        debug!(
            field = suggestion.field.as_str(),
            confidence = suggestion.confidence,
            source = suggestion.source.as_str(),
            "applying suggestion"
        );
        write_field(&mut updated, &suggestion.suggested_value);
        max_applied = Some(max_applied.map_or(suggestion.confidence, |current| {
            current.max(suggestion.confidence)
        }));
    }

    if let Some(applied) = max_applied {
        updated.parsing_status = ParsingStatus::Parsed;
        let previous = updated.parsing_confidence.unwrap_or(0.0);
        updated.parsing_confidence = Some(previous.max(applied));
    }

    updated
}

/// One step of the parsing-status state machine, run after re-validation
///
/// A parsed exercise that still reports issues moves to
/// [`ParsingStatus::NeedsReview`]; everything else is unchanged. The reset
/// to manual on a direct user edit is the caller's responsibility.
#[must_use]
pub const fn review_status(current: ParsingStatus, has_issues: bool) -> ParsingStatus {
    match (current, has_issues) {
        (ParsingStatus::Parsed, true) => ParsingStatus::NeedsReview,
        (status, _) => status,
    }
}

fn write_field(exercise: &mut Exercise, value: &FieldValue) {
    match value {
        FieldValue::Sets(sets) => exercise.sets = *sets,
        FieldValue::Reps(reps) => exercise.reps = reps.clone(),
        FieldValue::RestPeriod(seconds) => exercise.rest_period_seconds = Some(*seconds),
        FieldValue::Notes(notes) => exercise.notes = Some(notes.clone()),
    }
}

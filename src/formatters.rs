// ABOUTME: Canonical human-readable rendering of parsed exercise data
// ABOUTME: Produces strings like "4 sets × 8 reps, 1:00 rest, per arm"
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Formatters
//!
//! The canonical rendering used by callers to echo a parse back to the user.
//! Deterministic; round-trips with the parser for canonical inputs
//! (`"4 sets x 8 reps"` parses and renders back as `"4 sets × 8 reps"`).

use crate::models::ParsedExerciseData;

/// Render parsed exercise data in canonical human-readable form
///
/// Segments present in the parse are joined with `", "`; an empty parse
/// renders as the empty string. Rest periods are shown as `M:SS`.
#[must_use]
pub fn format_parsed_data(parsed: &ParsedExerciseData) -> String {
    let mut segments: Vec<String> = Vec::new();

    match (parsed.sets, &parsed.reps) {
        (Some(sets), Some(reps)) => segments.push(format!("{sets} sets \u{d7} {reps} reps")),
        (Some(sets), None) => segments.push(format!("{sets} sets")),
        (None, Some(reps)) => segments.push(format!("{reps} reps")),
        (None, None) => {}
    }

    if let Some(rest) = parsed.rest_period_seconds {
        segments.push(format!("{} rest", format_rest(rest)));
    }

    if let Some(notes) = &parsed.notes {
        if !notes.is_empty() {
            segments.push(notes.clone());
        }
    }

    segments.join(", ")
}

/// Rest period as `M:SS`
fn format_rest(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

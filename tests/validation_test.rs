// ABOUTME: Integration tests for exercise field validation heuristics
// ABOUTME: Covers field bleed, swap detection, range sanity, and confidence caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use exercise_parser::{
    validate_exercise, Exercise, ExerciseField, FieldValidator, FieldValue, ParsingStatus,
    RepsValue, SuggestionSource, ValidationConfig,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A well-formed exercise the heuristics should leave alone
fn clean_exercise() -> Exercise {
    Exercise {
        id: "ex-1".to_owned(),
        name: "Goblet Squat".to_owned(),
        sets: 3,
        reps: RepsValue::Count(10),
        rest_period_seconds: Some(60),
        notes: None,
        original_description: Some("3 sets of 10, rest 60s".to_owned()),
        parsing_status: ParsingStatus::Parsed,
        parsing_confidence: Some(0.9),
    }
}

#[test]
fn clean_exercise_passes() {
    let result = validate_exercise(&clean_exercise());
    assert!(result.is_valid);
    assert!(!result.has_warnings);
    assert!(result.suggestions.is_empty());
    assert_close(result.confidence, 1.0);
}

#[test]
fn field_bleed_splits_sets_and_reps() {
    let exercise = Exercise {
        sets: 1,
        reps: RepsValue::Text("4 sets x 8 reps".to_owned()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);

    assert_eq!(result.suggestions.len(), 2, "got: {:?}", result.suggestions);
    let sets = result
        .suggestions
        .iter()
        .find(|s| s.field == ExerciseField::Sets)
        .expect("sets suggestion");
    assert_eq!(sets.suggested_value, FieldValue::Sets(4));
    assert_close(sets.confidence, 0.95);

    let reps = result
        .suggestions
        .iter()
        .find(|s| s.field == ExerciseField::Reps)
        .expect("reps suggestion");
    assert_eq!(
        reps.suggested_value,
        FieldValue::Reps(RepsValue::Count(8))
    );
    assert_close(reps.confidence, 0.95);

    assert_close(result.confidence, 0.3);
    assert!(result.is_valid, "bleed is a warning, not a blocking issue");
}

#[test]
fn swap_detection_on_transposed_sets_and_reps() {
    let exercise = Exercise {
        sets: 25,
        reps: RepsValue::Count(5),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);

    assert!(result
        .warnings
        .iter()
        .any(|w| w.to_lowercase().contains("unusually high")));

    let swaps: Vec<_> = result
        .suggestions
        .iter()
        .filter(|s| s.source == SuggestionSource::SwapDetection)
        .collect();
    assert_eq!(swaps.len(), 2);
    for suggestion in &swaps {
        assert_close(suggestion.confidence, 0.7);
    }
    assert!(swaps
        .iter()
        .any(|s| s.suggested_value == FieldValue::Sets(5)));
    assert!(swaps
        .iter()
        .any(|s| s.suggested_value == FieldValue::Reps(RepsValue::Count(25))));
}

#[test]
fn high_sets_without_low_reps_only_warns() {
    let exercise = Exercise {
        sets: 25,
        reps: RepsValue::Count(15),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.has_warnings);
    assert!(result.suggestions.is_empty());
}

#[test]
fn zero_sets_is_a_blocking_issue() {
    let exercise = Exercise {
        sets: 0,
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(!result.is_valid);
    assert!(result.issues.iter().any(|i| i.contains("Sets")));
}

#[test]
fn single_set_with_complex_reps_suggests_default() {
    let exercise = Exercise {
        sets: 1,
        reps: RepsValue::Text("10 each leg alternating".to_owned()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    let default = result
        .suggestions
        .iter()
        .find(|s| s.source == SuggestionSource::DefaultSuggestion)
        .expect("default sets suggestion");
    assert_eq!(default.suggested_value, FieldValue::Sets(3));
    assert_close(default.confidence, 0.6);
}

#[test]
fn rest_period_recovered_from_reps_field() {
    let exercise = Exercise {
        reps: RepsValue::Text("8, rest 45 seconds".to_owned()),
        rest_period_seconds: None,
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    let rest = result
        .suggestions
        .iter()
        .find(|s| s.field == ExerciseField::RestPeriod)
        .expect("rest suggestion");
    assert_eq!(rest.suggested_value, FieldValue::RestPeriod(45));
    assert_close(rest.confidence, 0.8);
    assert_eq!(rest.source, SuggestionSource::TextAnalysis);
}

#[test]
fn rest_in_reps_is_skipped_when_rest_is_set() {
    let exercise = Exercise {
        reps: RepsValue::Text("8, rest 45 seconds".to_owned()),
        rest_period_seconds: Some(60),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result
        .suggestions
        .iter()
        .all(|s| s.field != ExerciseField::RestPeriod));
}

#[test]
fn zero_reps_is_a_blocking_issue() {
    let exercise = Exercise {
        reps: RepsValue::Count(0),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(!result.is_valid);
}

#[test]
fn very_high_reps_warns() {
    let exercise = Exercise {
        reps: RepsValue::Count(150),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.is_valid);
    assert!(result.has_warnings);
}

#[test]
fn inverted_text_range_is_an_issue() {
    let exercise = Exercise {
        reps: RepsValue::Text("12-8".to_owned()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(!result.is_valid);
    assert!(result.issues.iter().any(|i| i.contains("12-8")));
}

#[test]
fn valid_text_range_with_high_upper_bound_warns() {
    let exercise = Exercise {
        reps: RepsValue::Text("8-120".to_owned()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.is_valid);
    assert!(result.has_warnings);
}

#[test]
fn special_rep_formats_are_accepted() {
    for special in ["max", "AMRAP", "12+", "to failure"] {
        let exercise = Exercise {
            reps: RepsValue::Text(special.to_owned()),
            ..clean_exercise()
        };
        let result = validate_exercise(&exercise);
        assert!(!result.has_warnings, "{special} should be recognized");
        assert_close(result.confidence, 1.0);
    }
}

#[test]
fn unrecognized_reps_format_caps_confidence() {
    let exercise = Exercise {
        reps: RepsValue::Text("a few".to_owned()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.has_warnings);
    assert_close(result.confidence, 0.5);
}

#[test]
fn very_long_rest_warns() {
    let exercise = Exercise {
        rest_period_seconds: Some(900),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.is_valid);
    assert!(result.warnings.iter().any(|w| w.contains("rest")));
}

#[test]
fn workout_data_in_long_name_is_surfaced() {
    let padding = "Dumbbell Bulgarian split squat with a pause at the bottom and a controlled eccentric portion throughout";
    let exercise = Exercise {
        name: format!("{padding} 4 sets x 8 reps"),
        ..clean_exercise()
    };
    assert!(exercise.name.len() > 100);

    let result = validate_exercise(&exercise);
    let from_name: Vec<_> = result
        .suggestions
        .iter()
        .filter(|s| s.source == SuggestionSource::NameAnalysis)
        .collect();
    assert_eq!(from_name.len(), 2);
    for suggestion in &from_name {
        assert_close(suggestion.confidence, 0.95 * 0.8);
    }
    assert!(from_name
        .iter()
        .any(|s| s.suggested_value == FieldValue::Sets(4)));
}

#[test]
fn short_name_is_not_reparsed() {
    let exercise = Exercise {
        name: "Squat 4 sets x 8 reps".to_owned(),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result
        .suggestions
        .iter()
        .all(|s| s.source != SuggestionSource::NameAnalysis));
}

#[test]
fn missing_data_caps_confidence() {
    let exercise = Exercise {
        sets: 0,
        reps: RepsValue::Text(String::new()),
        ..clean_exercise()
    };
    let result = validate_exercise(&exercise);
    assert!(result.has_warnings);
    assert!(!result.is_valid, "zero sets is still an issue");
    assert_close(result.confidence, 0.2);
}

#[test]
fn validation_does_not_mutate_the_exercise() {
    let exercise = Exercise {
        sets: 25,
        reps: RepsValue::Text("4 sets x 8 reps".to_owned()),
        ..clean_exercise()
    };
    let before = exercise.clone();
    let _ = validate_exercise(&exercise);
    assert_eq!(exercise, before);
}

#[test]
fn custom_thresholds_are_honored() {
    let config = ValidationConfig {
        max_sets: 5,
        ..ValidationConfig::default()
    };
    let validator = FieldValidator::with_config(config);
    let exercise = Exercise {
        sets: 6,
        reps: RepsValue::Count(12),
        ..clean_exercise()
    };
    let result = validator.validate(&exercise);
    assert!(result.has_warnings, "6 sets exceeds the custom threshold");
}

// ABOUTME: Integration tests for the exercise data model and its string forms
// ABOUTME: Covers checked constructors, lenient decoding, serde shapes, and enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use exercise_parser::{
    Exercise, ExerciseDataError, ExerciseField, FieldSuggestion, FieldValue, ParsingStatus,
    RepsValue, SuggestionSource,
};
use serde_json::json;

#[test]
fn checked_range_constructor_rejects_inversion() {
    assert_eq!(
        RepsValue::range(8, 12),
        Ok(RepsValue::Range { min: 8, max: 12 })
    );
    assert_eq!(
        RepsValue::range(12, 8),
        Err(ExerciseDataError::InvalidRepsRange { min: 12, max: 8 })
    );
    assert_eq!(
        RepsValue::range(8, 8),
        Err(ExerciseDataError::InvalidRepsRange { min: 8, max: 8 })
    );
}

#[test]
fn lenient_reps_decoding_never_fails() {
    assert_eq!(RepsValue::parse("8"), RepsValue::Count(8));
    assert_eq!(RepsValue::parse(" 8-12 "), RepsValue::Range { min: 8, max: 12 });
    assert_eq!(RepsValue::parse("12-8"), RepsValue::Text("12-8".to_owned()));
    assert_eq!(RepsValue::parse("amrap"), RepsValue::Text("amrap".to_owned()));
}

#[test]
fn reps_display_forms() {
    assert_eq!(RepsValue::Count(8).to_string(), "8");
    assert_eq!(RepsValue::Range { min: 8, max: 12 }.to_string(), "8-12");
    assert_eq!(RepsValue::Text("max".to_owned()).to_string(), "max");
}

#[test]
fn reps_serialize_untagged() {
    assert_eq!(serde_json::to_value(RepsValue::Count(8)).unwrap(), json!(8));
    assert_eq!(
        serde_json::to_value(RepsValue::Range { min: 8, max: 12 }).unwrap(),
        json!({"min": 8, "max": 12})
    );
    assert_eq!(
        serde_json::to_value(RepsValue::Text("amrap".to_owned())).unwrap(),
        json!("amrap")
    );

    let decoded: RepsValue = serde_json::from_value(json!(10)).unwrap();
    assert_eq!(decoded, RepsValue::Count(10));
}

#[test]
fn parsing_status_string_forms() {
    assert_eq!(ParsingStatus::NeedsReview.as_str(), "needs_review");
    assert_eq!(
        ParsingStatus::parse("needs_review"),
        Ok(ParsingStatus::NeedsReview)
    );
    assert_eq!(ParsingStatus::parse(" Parsed "), Ok(ParsingStatus::Parsed));
    assert!(matches!(
        ParsingStatus::parse("wat"),
        Err(ExerciseDataError::UnknownParsingStatus(_))
    ));
}

#[test]
fn exercise_field_string_forms() {
    assert_eq!(ExerciseField::RestPeriod.as_str(), "rest_period");
    assert_eq!(ExerciseField::parse("sets"), Ok(ExerciseField::Sets));
    assert_eq!(ExerciseField::parse("rest"), Ok(ExerciseField::RestPeriod));
    assert!(matches!(
        ExerciseField::parse("bogus"),
        Err(ExerciseDataError::UnknownField(_))
    ));
}

#[test]
fn field_value_knows_its_field() {
    assert_eq!(FieldValue::Sets(3).field(), ExerciseField::Sets);
    assert_eq!(
        FieldValue::Reps(RepsValue::Count(8)).field(),
        ExerciseField::Reps
    );
    assert_eq!(FieldValue::RestPeriod(60).field(), ExerciseField::RestPeriod);
    assert_eq!(
        FieldValue::Notes("per arm".to_owned()).field(),
        ExerciseField::Notes
    );
}

#[test]
fn suggestion_describe_is_human_readable() {
    let suggestion = FieldSuggestion {
        field: ExerciseField::Sets,
        current_value: Some(FieldValue::Sets(1)),
        suggested_value: FieldValue::Sets(4),
        confidence: 0.95,
        reason: "Sets information found in reps field".to_owned(),
        source: SuggestionSource::FieldAnalysis,
    };
    let line = suggestion.describe();
    assert!(line.contains("Sets information found in reps field"));
    assert!(line.contains('1'));
    assert!(line.contains('4'));
}

#[test]
fn exercise_serde_round_trip() {
    let exercise = Exercise {
        id: "ex-1".to_owned(),
        name: "Goblet Squat".to_owned(),
        sets: 3,
        reps: RepsValue::Range { min: 8, max: 12 },
        rest_period_seconds: Some(60),
        notes: Some("per arm".to_owned()),
        original_description: Some("3 sets of 8-12 reps, rest 60s".to_owned()),
        parsing_status: ParsingStatus::Parsed,
        parsing_confidence: Some(0.9),
    };
    let encoded = serde_json::to_string(&exercise).unwrap();
    assert!(encoded.contains("\"parsed\""), "status serializes snake_case");
    let decoded: Exercise = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, exercise);
}

#[test]
fn suggestion_source_wire_names() {
    let encoded = serde_json::to_value(SuggestionSource::SwapDetection).unwrap();
    assert_eq!(encoded, json!("swap_detection"));
    assert_eq!(SuggestionSource::NameAnalysis.as_str(), "name_analysis");
}

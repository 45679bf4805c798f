//! Serialization of the record tree and goal values.
//!
//! The host application persists these as JSON documents; the engine's
//! types have to survive the trip unchanged.

use liftlog::exercises::{ExerciseTemplate, Modality, MuscleGroup};
use liftlog::{Cadence, Measurement, RecurringGoal, TargetGoal, TargetKind, WorkoutRecord};
use uuid::Uuid;

use crate::helpers::{add_strength_sets, date, workout_on};

#[test]
fn test_workout_tree_round_trip() {
    let bench = Uuid::new_v4();
    let mut workout = workout_on(date(2024, 3, 11), 55);
    add_strength_sets(&mut workout, bench, &[(135.0, 10), (185.0, 5)]);

    let json = serde_json::to_string(&workout).unwrap();
    let back: WorkoutRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, workout.id);
    assert_eq!(back.started_at, workout.started_at);
    assert_eq!(back.exercises.len(), 1);
    assert_eq!(back.exercises[0].template_id, bench);
    assert_eq!(back.exercises[0].sets, workout.exercises[0].sets);
}

#[test]
fn test_goal_round_trip_keeps_measurement() {
    let bench = Uuid::new_v4();
    let goal = RecurringGoal::new(
        "Bench volume",
        Cadence::Monthly,
        Measurement::Reps { exercise_id: bench },
        500.0,
        date(2024, 1, 1),
    );

    let json = serde_json::to_string(&goal).unwrap();
    let back: RecurringGoal = serde_json::from_str(&json).unwrap();
    assert_eq!(back.measurement, Measurement::Reps { exercise_id: bench });
    assert_eq!(back.cadence, Cadence::Monthly);
    assert_eq!(back.target, 500.0);
}

#[test]
fn test_target_goal_round_trip() {
    let goal = TargetGoal::new(
        "5k pace",
        Uuid::new_v4(),
        TargetKind::Pace {
            distance: 5.0,
            minutes: 25.0,
        },
        date(2024, 1, 1),
    );

    let json = serde_json::to_string(&goal).unwrap();
    assert!(json.contains("\"kind\":\"pace\""));
    let back: TargetGoal = serde_json::from_str(&json).unwrap();
    assert_eq!(back.kind, goal.kind);
}

#[test]
fn test_template_round_trip() {
    let template = ExerciseTemplate::new("Deadlift", MuscleGroup::Back, Modality::Repetition);
    let json = serde_json::to_string(&template).unwrap();
    assert!(json.contains("\"modality\":\"repetition\""));
    let back: ExerciseTemplate = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, template.id);
    assert_eq!(back.name, "Deadlift");
}

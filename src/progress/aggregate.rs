//! Per-period progress aggregation.
//!
//! Reduces the workout log into a single progress value for one period
//! of a recurring goal. Absence of data is a valid zero, never an error.

use chrono::{NaiveDate, Utc};

use crate::goals::{Measurement, RecurringGoal};
use crate::progress::period::Period;
use crate::workouts::WorkoutRecord;

/// Progress toward a recurring goal within one period.
///
/// Filters the log to workouts started inside `[period.start, period.end)`
/// and reduces per the goal's measurement kind:
/// - Minutes: sum of workout durations (unclosed workouts contribute 0)
/// - Workouts: count of workouts
/// - Reps: sum of reps across the goal exercise's sets
pub fn progress_in_period(
    period: Period,
    goal: &RecurringGoal,
    workouts: &[WorkoutRecord],
) -> f64 {
    let in_period = workouts
        .iter()
        .filter(|w| period.contains_datetime(w.started_at));

    let progress = match goal.measurement {
        Measurement::Minutes => in_period.map(WorkoutRecord::duration_minutes).sum(),
        Measurement::Workouts => in_period.count() as f64,
        Measurement::Reps { exercise_id } => in_period
            .flat_map(|w| w.sets_of(exercise_id))
            .map(|s| f64::from(s.reps))
            .sum(),
    };

    tracing::trace!(
        goal = %goal.name,
        period = %period,
        progress,
        "aggregated period progress"
    );
    progress
}

/// Progress toward a recurring goal in the period containing `today`.
pub fn current_progress(goal: &RecurringGoal, workouts: &[WorkoutRecord], today: NaiveDate) -> f64 {
    progress_in_period(Period::containing(today, goal.cadence), goal, workouts)
}

/// Progress toward a recurring goal in the period containing the current
/// UTC date.
pub fn current_progress_now(goal: &RecurringGoal, workouts: &[WorkoutRecord]) -> f64 {
    current_progress(goal, workouts, Utc::now().date_naive())
}

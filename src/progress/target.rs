//! Best-ever evaluation for target goals.
//!
//! Scans the whole workout log for the best historical achievement on a
//! target goal's exercise and expresses it as an uncapped ratio against
//! the milestone. A set only counts when it meets the goal's secondary
//! threshold: the rep count for strength goals, the distance for pace
//! goals. No qualifying set is a valid "no data" zero, never an error.

use crate::goals::{TargetGoal, TargetKind};
use crate::workouts::{SetRecord, WorkoutRecord};

/// Best value achieved toward a target goal, or `None` when no set
/// qualifies.
///
/// - Strength: the heaviest weight moved for at least the goal's rep
///   count. Heavier sets at fewer reps never count.
/// - Pace: the best distance-per-minute among sets that covered at least
///   the goal distance with a recorded time.
pub fn best_achieved(goal: &TargetGoal, workouts: &[WorkoutRecord]) -> Option<f64> {
    let sets = workouts.iter().flat_map(|w| w.sets_of(goal.exercise_id));

    match goal.kind {
        TargetKind::Strength { reps, .. } => sets
            .filter(|s| s.reps >= reps)
            .map(|s| s.weight)
            .reduce(f64::max),
        TargetKind::Pace { distance, .. } => sets
            .filter(|s| s.distance >= distance)
            .filter_map(SetRecord::pace)
            .reduce(f64::max),
    }
}

/// Progress ratio toward a target goal: best achieved divided by the
/// target value, uncapped so completion beyond the target stays visible.
///
/// Returns 0.0 when no set qualifies or when the goal's target value is
/// degenerate (zero or non-finite denominator).
pub fn target_progress(goal: &TargetGoal, workouts: &[WorkoutRecord]) -> f64 {
    let target_value = match goal.kind {
        TargetKind::Strength { weight, .. } => weight,
        TargetKind::Pace { distance, minutes } => {
            if minutes > 0.0 {
                distance / minutes
            } else {
                0.0
            }
        }
    };
    if !target_value.is_finite() || target_value <= 0.0 {
        return 0.0;
    }

    match best_achieved(goal, workouts) {
        Some(best) => best / target_value,
        None => 0.0,
    }
}

/// Human-readable best-vs-target line for the presentation layer.
pub fn progress_description(goal: &TargetGoal, workouts: &[WorkoutRecord]) -> String {
    let best = best_achieved(goal, workouts);
    let percent = (target_progress(goal, workouts) * 100.0).round();

    match (goal.kind, best) {
        (TargetKind::Strength { weight, reps }, Some(best)) => format!(
            "Best {best:.1} at {reps}+ reps ({percent:.0}% of {weight:.1} target)"
        ),
        (TargetKind::Strength { weight, reps }, None) => {
            format!("No attempts at {reps}+ reps toward {weight:.1} yet")
        }
        (TargetKind::Pace { distance, minutes }, Some(best)) => format!(
            "Best pace {best:.2}/min over {distance:.1}+ ({percent:.0}% of {:.2}/min target)",
            distance / minutes
        ),
        (TargetKind::Pace { distance, minutes }, None) => {
            format!("No qualifying attempts toward {distance:.1} in {minutes:.0} min yet")
        }
    }
}

//! Consecutive-period streak calculation.
//!
//! A streak is the number of consecutive periods, walking backward from
//! the present, in which a recurring goal's target was met. The walk
//! stops at the first missed period or when the goal's history is
//! exhausted, whichever comes first.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::goals::RecurringGoal;
use crate::progress::aggregate::progress_in_period;
use crate::progress::period::{periods_between, Period};
use crate::workouts::WorkoutRecord;

/// Progress for one period of a recurring goal's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodProgress {
    /// The period the value was aggregated over
    pub period: Period,
    /// Aggregated progress value
    pub progress: f64,
    /// Whether the goal's target was met
    pub met: bool,
}

/// Count of consecutive met periods ending at the period containing
/// `today`.
///
/// Returns 0 when the current period already misses the target, when the
/// goal starts in the future, or when the target is degenerate (zero,
/// negative, or non-finite) — a degenerate target would otherwise make
/// every period a trivial hit.
pub fn current_streak(goal: &RecurringGoal, workouts: &[WorkoutRecord], today: NaiveDate) -> u32 {
    if !goal.target.is_finite() || goal.target <= 0.0 {
        tracing::debug!(goal = %goal.name, target = goal.target, "degenerate target, streak is 0");
        return 0;
    }

    let mut streak = 0;
    for period in periods_between(goal.start_date, today, goal.cadence) {
        let progress = progress_in_period(period, goal, workouts);
        if progress < goal.target {
            break;
        }
        streak += 1;
    }

    tracing::debug!(goal = %goal.name, streak, "computed streak");
    streak
}

/// Streak ending at the period containing the current UTC date.
pub fn current_streak_now(goal: &RecurringGoal, workouts: &[WorkoutRecord]) -> u32 {
    current_streak(goal, workouts, Utc::now().date_naive())
}

/// Per-period progress listing for a goal's whole history, newest first.
///
/// Covers every period from the one containing `today` back through the
/// one containing the goal's start date.
pub fn period_history(
    goal: &RecurringGoal,
    workouts: &[WorkoutRecord],
    today: NaiveDate,
) -> Vec<PeriodProgress> {
    periods_between(goal.start_date, today, goal.cadence)
        .map(|period| {
            let progress = progress_in_period(period, goal, workouts);
            PeriodProgress {
                period,
                progress,
                met: progress >= goal.target,
            }
        })
        .collect()
}

//! Composed goal snapshots for the presentation layer.
//!
//! The host application recomputes these after every workout or goal
//! mutation and renders them directly; nothing here adds logic beyond
//! composing the period, aggregation, streak, and target evaluators.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goals::{RecurringGoal, TargetGoal};
use crate::progress::aggregate::progress_in_period;
use crate::progress::period::Period;
use crate::progress::streak::current_streak;
use crate::progress::target::{best_achieved, progress_description, target_progress};
use crate::workouts::WorkoutRecord;

/// Snapshot of a recurring goal's standing as of a reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringGoalReport {
    /// Goal this report describes
    pub goal_id: Uuid,
    /// The active period the progress was aggregated over
    pub period: Period,
    /// Aggregated progress in the active period
    pub progress: f64,
    /// The goal's per-period target
    pub target: f64,
    /// Whether the active period's target is met
    pub met: bool,
    /// Consecutive met periods ending at the active period
    pub streak: u32,
}

impl RecurringGoalReport {
    /// Progress as a display percentage, capped at 100.
    pub fn percent(&self) -> f64 {
        if self.target > 0.0 {
            (self.progress / self.target * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Snapshot of a target goal's best-ever standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetGoalReport {
    /// Goal this report describes
    pub goal_id: Uuid,
    /// Best qualifying achievement, if any
    pub best: Option<f64>,
    /// Uncapped best-over-target ratio (0.0 without data)
    pub ratio: f64,
    /// Rendered best-vs-target line
    pub description: String,
}

impl TargetGoalReport {
    /// Ratio as a display percentage, capped at 100.
    pub fn percent(&self) -> f64 {
        (self.ratio * 100.0).min(100.0)
    }
}

/// Build the recurring-goal snapshot as of `today`.
pub fn recurring_report(
    goal: &RecurringGoal,
    workouts: &[WorkoutRecord],
    today: NaiveDate,
) -> RecurringGoalReport {
    let period = Period::containing(today, goal.cadence);
    let progress = progress_in_period(period, goal, workouts);
    RecurringGoalReport {
        goal_id: goal.id,
        period,
        progress,
        target: goal.target,
        met: goal.target > 0.0 && progress >= goal.target,
        streak: current_streak(goal, workouts, today),
    }
}

/// Build the recurring-goal snapshot as of the current UTC date.
pub fn recurring_report_now(
    goal: &RecurringGoal,
    workouts: &[WorkoutRecord],
) -> RecurringGoalReport {
    recurring_report(goal, workouts, Utc::now().date_naive())
}

/// Build the target-goal snapshot.
pub fn target_report(goal: &TargetGoal, workouts: &[WorkoutRecord]) -> TargetGoalReport {
    TargetGoalReport {
        goal_id: goal.id,
        best: best_achieved(goal, workouts),
        ratio: target_progress(goal, workouts),
        description: progress_description(goal, workouts),
    }
}

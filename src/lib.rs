//! LiftLog - Personal Fitness Logging Engine
//!
//! The computational core of a personal fitness-logging application.
//! Provides the workout log record types, user-defined goal definitions,
//! and the goal progress & streak engine: calendar-aligned period math,
//! per-period progress aggregation, consecutive-period streak counting,
//! and best-ever evaluation for long-lived target goals.
//!
//! Everything here is a pure, synchronous computation over a caller-owned
//! snapshot of the workout log; the presentation layer and the store that
//! own workouts and goals live in the host application.

pub mod exercises;
pub mod goals;
pub mod progress;
pub mod workouts;

// Re-export commonly used types
pub use exercises::{ExerciseTemplate, Modality, MuscleGroup};
pub use goals::{Cadence, GoalError, Measurement, RecurringGoal, TargetGoal, TargetKind};
pub use progress::period::{periods_between, Period};
pub use progress::report::{recurring_report, target_report, RecurringGoalReport, TargetGoalReport};
pub use workouts::{ExerciseRecord, SetRecord, WorkoutRecord};

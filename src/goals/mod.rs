//! User-defined goal types.
//!
//! Two kinds of goal exist:
//! - Recurring goals measured every calendar period (train 3x a week,
//!   200 minutes a month, 500 bench-press reps a month)
//! - Target goals tracking a best-ever achievement against a fixed
//!   milestone (a strength one-rep-max, a pace mark)
//!
//! Goal creation, renaming, retargeting, and deletion are owned by the
//! host application's store; the engine only reads these values.

pub mod types;

// Re-exports for convenience
pub use types::{Cadence, GoalError, Measurement, RecurringGoal, TargetGoal, TargetKind};

//! Goal progress & streak engine.
//!
//! Pure, synchronous computations over a snapshot of the workout log:
//! - [`period`]: cadence to calendar-aligned half-open periods
//! - [`aggregate`]: workout history to a progress value per period
//! - [`streak`]: consecutive periods of goal attainment
//! - [`target`]: best-ever achievement against a fixed milestone
//! - [`report`]: composed snapshots for the presentation layer
//!
//! Nothing here caches or mutates; every call re-derives its result from
//! the supplied collection, so a stale snapshot simply yields a stale
//! answer and thread-safety comes from statelessness.

pub mod aggregate;
pub mod period;
pub mod report;
pub mod streak;
pub mod target;

// Re-exports for convenience
pub use aggregate::{current_progress, progress_in_period};
pub use period::{periods_between, Period, PeriodsBetween};
pub use report::{recurring_report, target_report, RecurringGoalReport, TargetGoalReport};
pub use streak::{current_streak, period_history, PeriodProgress};
pub use target::{best_achieved, progress_description, target_progress};

//! Workout log record types.
//!
//! A workout is an append-only log entry: one session with an ordered
//! list of exercises, each with an ordered list of sets. The engine only
//! ever reads these records; creation and editing belong to the host
//! application.

pub mod types;

// Re-exports for convenience
pub use types::{ExerciseRecord, SetRecord, WorkoutRecord};

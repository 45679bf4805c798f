//! Goal type definitions and validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How often a recurring goal's measurement window repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// One calendar day
    Daily,
    /// One calendar week, Monday through Sunday
    Weekly,
    /// One calendar month
    Monthly,
}

impl Cadence {
    /// Get display name for the cadence.
    pub fn display_name(&self) -> &'static str {
        match self {
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a recurring goal counts within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    /// Total workout minutes in the period
    Minutes,
    /// Number of workouts logged in the period
    Workouts,
    /// Total reps of one exercise in the period
    Reps {
        /// Exercise template the reps are counted against
        exercise_id: Uuid,
    },
}

impl Measurement {
    /// Get display name for the measurement kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Measurement::Minutes => "Minutes",
            Measurement::Workouts => "Workouts",
            Measurement::Reps { .. } => "Reps",
        }
    }

    /// Unit label for rendering progress values.
    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Minutes => "min",
            Measurement::Workouts => "workouts",
            Measurement::Reps { .. } => "reps",
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A goal measured against every calendar period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringGoal {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Measurement window cadence
    pub cadence: Cadence,
    /// What is counted within each period
    pub measurement: Measurement,
    /// Per-period target to meet (must be > 0)
    pub target: f64,
    /// No period exists before this date
    pub start_date: NaiveDate,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// When the goal was last updated
    pub updated_at: DateTime<Utc>,
}

impl RecurringGoal {
    /// Create a new recurring goal starting on the given date.
    pub fn new(
        name: impl Into<String>,
        cadence: Cadence,
        measurement: Measurement,
        target: f64,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cadence,
            measurement,
            target,
            start_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the goal's configuration.
    ///
    /// Callers should reject invalid goals at creation time; the engine
    /// itself degrades gracefully on a degenerate target but never
    /// produces a meaningful streak from one.
    pub fn validate(&self) -> Result<(), GoalError> {
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(GoalError::Validation(format!(
                "recurring goal target must be positive, got {}",
                self.target
            )));
        }
        Ok(())
    }
}

/// What a target goal's milestone measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetKind {
    /// Lift a weight for at least a rep count
    Strength {
        /// Weight to move
        weight: f64,
        /// Minimum reps the weight must be moved for
        reps: u32,
    },
    /// Cover a distance within a time
    Pace {
        /// Distance to cover
        distance: f64,
        /// Time budget in minutes
        minutes: f64,
    },
}

impl TargetKind {
    /// Get display name for the target kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetKind::Strength { .. } => "Strength",
            TargetKind::Pace { .. } => "Pace",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An open-ended goal tracking the best-ever achievement against a
/// fixed milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetGoal {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Exercise template the milestone applies to
    pub exercise_id: Uuid,
    /// The milestone itself
    pub kind: TargetKind,
    /// When the user started pursuing the milestone
    pub start_date: NaiveDate,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// When the goal was last updated
    pub updated_at: DateTime<Utc>,
}

impl TargetGoal {
    /// Create a new target goal for an exercise.
    pub fn new(
        name: impl Into<String>,
        exercise_id: Uuid,
        kind: TargetKind,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            exercise_id,
            kind,
            start_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the goal's configuration: both target values must be
    /// positive and finite.
    pub fn validate(&self) -> Result<(), GoalError> {
        match self.kind {
            TargetKind::Strength { weight, reps } => {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(GoalError::Validation(format!(
                        "strength target weight must be positive, got {weight}"
                    )));
                }
                if reps == 0 {
                    return Err(GoalError::Validation(
                        "strength target reps must be at least 1".to_string(),
                    ));
                }
            }
            TargetKind::Pace { distance, minutes } => {
                if !distance.is_finite() || distance <= 0.0 {
                    return Err(GoalError::Validation(format!(
                        "pace target distance must be positive, got {distance}"
                    )));
                }
                if !minutes.is_finite() || minutes <= 0.0 {
                    return Err(GoalError::Validation(format!(
                        "pace target time must be positive, got {minutes}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Goal configuration errors.
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("Validation error: {0}")]
    Validation(String),
}

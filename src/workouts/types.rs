//! Workout, exercise, and set record structs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exercises::Modality;

/// Maximum intensity rating a set can carry (RPE-style 0-5 scale).
pub const MAX_INTENSITY: u8 = 5;

/// A single logged set within an exercise.
///
/// Which fields are meaningful depends on the parent exercise's modality:
/// repetition work populates `weight`/`reps`, endurance work populates
/// `distance`/`time`. The unused pair stays at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Repetition count
    pub reps: u32,
    /// Weight moved, in the user's configured unit
    pub weight: f64,
    /// Elapsed time in minutes
    pub time: f64,
    /// Distance covered, in the user's configured unit
    pub distance: f64,
    /// Optional perceived intensity (0-5)
    pub intensity: Option<u8>,
}

impl SetRecord {
    /// Create a repetition-style set (weight x reps).
    pub fn strength(weight: f64, reps: u32) -> Self {
        Self {
            reps,
            weight,
            time: 0.0,
            distance: 0.0,
            intensity: None,
        }
    }

    /// Create an endurance-style set (distance x time in minutes).
    pub fn endurance(distance: f64, time: f64) -> Self {
        Self {
            reps: 0,
            weight: 0.0,
            time,
            distance,
            intensity: None,
        }
    }

    /// Attach an intensity rating, clamped to the 0-5 scale.
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = Some(intensity.min(MAX_INTENSITY));
        self
    }

    /// Pace of an endurance set as distance per minute.
    ///
    /// Returns `None` when no time was recorded.
    pub fn pace(&self) -> Option<f64> {
        if self.time > 0.0 {
            Some(self.distance / self.time)
        } else {
            None
        }
    }
}

/// One exercise performed during a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Catalog entry this exercise was logged against (weak reference)
    pub template_id: Uuid,
    /// Muscle group / category reference
    pub category_id: Uuid,
    /// Measurement style, copied from the template at logging time
    pub modality: Modality,
    /// Sets in the order they were performed
    pub sets: Vec<SetRecord>,
}

impl ExerciseRecord {
    /// Create an empty exercise entry for a template.
    pub fn new(template_id: Uuid, category_id: Uuid, modality: Modality) -> Self {
        Self {
            template_id,
            category_id,
            modality,
            sets: Vec::new(),
        }
    }

    /// Create an exercise entry with its sets.
    pub fn with_sets(
        template_id: Uuid,
        category_id: Uuid,
        modality: Modality,
        sets: Vec<SetRecord>,
    ) -> Self {
        Self {
            template_id,
            category_id,
            modality,
            sets,
        }
    }

    /// Total reps across all sets.
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps)).sum()
    }
}

/// One logged workout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier
    pub id: Uuid,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session ended; `None` while in progress or never closed
    pub ended_at: Option<DateTime<Utc>>,
    /// Exercises in the order they were performed
    pub exercises: Vec<ExerciseRecord>,
}

impl WorkoutRecord {
    /// Create a new workout starting at the given time.
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at: None,
            exercises: Vec::new(),
        }
    }

    /// Calendar date (UTC) the workout started on.
    pub fn started_on(&self) -> NaiveDate {
        self.started_at.date_naive()
    }

    /// Session duration in minutes.
    ///
    /// A workout that was never closed, or whose end timestamp precedes
    /// its start, contributes zero.
    pub fn duration_minutes(&self) -> f64 {
        match self.ended_at {
            Some(ended_at) if ended_at > self.started_at => {
                (ended_at - self.started_at).num_seconds() as f64 / 60.0
            }
            _ => 0.0,
        }
    }

    /// Iterate over all sets logged against a given exercise template.
    pub fn sets_of(&self, template_id: Uuid) -> impl Iterator<Item = &SetRecord> {
        self.exercises
            .iter()
            .filter(move |e| e.template_id == template_id)
            .flat_map(|e| e.sets.iter())
    }
}

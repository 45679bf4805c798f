//! Exercise template definitions.
//!
//! Templates are the catalog entries that logged exercises point back to
//! via `template_id`. The catalog itself (creation, editing, seeding) is
//! owned by the host application; the engine only needs the identifiers
//! and the modality/category vocabulary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement style of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Weight x reps (barbell bench press, dumbbell curl)
    Repetition,
    /// Time under load, no meaningful rep count (plank, dead hang)
    Tension,
    /// Distance x time (running, rowing, cycling)
    Endurance,
}

impl Modality {
    /// Get display name for the modality.
    pub fn display_name(&self) -> &'static str {
        match self {
            Modality::Repetition => "Repetition",
            Modality::Tension => "Tension",
            Modality::Endurance => "Endurance",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Muscle group / body category an exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    /// Get display name for the muscle group.
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A reusable exercise definition in the user's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Unique identifier, referenced by logged exercises
    pub id: Uuid,
    /// Display name (e.g. "Bench Press")
    pub name: String,
    /// Body category
    pub category: MuscleGroup,
    /// Measurement style
    pub modality: Modality,
}

impl ExerciseTemplate {
    /// Create a new exercise template.
    pub fn new(name: impl Into<String>, category: MuscleGroup, modality: Modality) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            modality,
        }
    }
}

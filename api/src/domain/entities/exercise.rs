//! Exercise domain entity
//!
//! Exercises are the rally signs a track is built from. They are reference
//! data: seeded once, never modified by the track flow.

use serde::{Deserialize, Serialize};

/// Unique identifier for an exercise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseId(pub i32);

impl From<i32> for ExerciseId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movement pace the handler and dog perform the exercise at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    #[default]
    Walk,
    Run,
    Slow,
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pace::Walk => write!(f, "walk"),
            Pace::Run => write!(f, "run"),
            Pace::Slow => write!(f, "slow"),
        }
    }
}

impl std::str::FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" => Ok(Pace::Walk),
            "run" => Ok(Pace::Run),
            "slow" => Ok(Pace::Slow),
            _ => Err(format!("Unknown pace: {}", s)),
        }
    }
}

/// Competition class an exercise belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseClass {
    #[default]
    Beginner,
    Advanced,
    Expert,
    Champion,
}

impl std::fmt::Display for ExerciseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseClass::Beginner => write!(f, "beginner"),
            ExerciseClass::Advanced => write!(f, "advanced"),
            ExerciseClass::Expert => write!(f, "expert"),
            ExerciseClass::Champion => write!(f, "champion"),
        }
    }
}

impl std::str::FromStr for ExerciseClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExerciseClass::Beginner),
            "advanced" => Ok(ExerciseClass::Advanced),
            "expert" => Ok(ExerciseClass::Expert),
            "champion" => Ok(ExerciseClass::Champion),
            _ => Err(format!("Unknown exercise class: {}", s)),
        }
    }
}

/// A rally exercise with its display and categorization metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub movement: Pace,
    pub side_shift: bool,
    pub illustration_path: String,
    pub class: ExerciseClass,
    pub sign_number: i32,
    /// Default placement on the course canvas
    pub position_x: i32,
    pub position_y: i32,
}

// SPDX-License-Identifier: MIT

//! Workout catalog item model.
//!
//! The catalog is read-mostly: records are authored on the backend and the
//! local copy is replaced wholesale on every successful refresh.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A predefined workout from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// UUID, also the remote record id
    pub id: String,
    pub name: String,
    pub category: WorkoutCategory,
    pub difficulty_level: DifficultyLevel,
    pub duration_minutes: u32,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
}

/// Catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutCategory {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
    Yoga,
    Pilates,
    Meditation,
    FullBody,
    UpperBody,
    LowerBody,
    Core,
}

impl WorkoutCategory {
    /// Wire/storage form of the variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Strength => "STRENGTH",
            WorkoutCategory::Cardio => "CARDIO",
            WorkoutCategory::Flexibility => "FLEXIBILITY",
            WorkoutCategory::Hiit => "HIIT",
            WorkoutCategory::Yoga => "YOGA",
            WorkoutCategory::Pilates => "PILATES",
            WorkoutCategory::Meditation => "MEDITATION",
            WorkoutCategory::FullBody => "FULL_BODY",
            WorkoutCategory::UpperBody => "UPPER_BODY",
            WorkoutCategory::LowerBody => "LOWER_BODY",
            WorkoutCategory::Core => "CORE",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STRENGTH" => Ok(WorkoutCategory::Strength),
            "CARDIO" => Ok(WorkoutCategory::Cardio),
            "FLEXIBILITY" => Ok(WorkoutCategory::Flexibility),
            "HIIT" => Ok(WorkoutCategory::Hiit),
            "YOGA" => Ok(WorkoutCategory::Yoga),
            "PILATES" => Ok(WorkoutCategory::Pilates),
            "MEDITATION" => Ok(WorkoutCategory::Meditation),
            "FULL_BODY" => Ok(WorkoutCategory::FullBody),
            "UPPER_BODY" => Ok(WorkoutCategory::UpperBody),
            "LOWER_BODY" => Ok(WorkoutCategory::LowerBody),
            "CORE" => Ok(WorkoutCategory::Core),
            other => Err(format!("Invalid workout category: {}", other)),
        }
    }
}

/// Difficulty rating of a catalog workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "BEGINNER",
            DifficultyLevel::Intermediate => "INTERMEDIATE",
            DifficultyLevel::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(DifficultyLevel::Beginner),
            "INTERMEDIATE" => Ok(DifficultyLevel::Intermediate),
            "ADVANCED" => Ok(DifficultyLevel::Advanced),
            other => Err(format!("Invalid difficulty level: {}", other)),
        }
    }
}

// SPDX-License-Identifier: MIT

//! Workout catalog use-cases: search and logging a completed workout.

use crate::error::Result;
use crate::models::{Activity, ActivityType, DifficultyLevel, Workout, WorkoutCategory};
use crate::repository::{ActivityRepository, WorkoutRepository};
use crate::usecase::non_blank;
use chrono::{DateTime, Utc};

/// Minimum query length before the catalog is searched at all.
const MIN_QUERY_LEN: usize = 2;

/// Catalog search with a minimum query length.
#[derive(Clone)]
pub struct SearchWorkoutsUseCase {
    workouts: WorkoutRepository,
}

impl SearchWorkoutsUseCase {
    pub fn new(workouts: WorkoutRepository) -> Self {
        Self { workouts }
    }

    /// Queries shorter than two characters return nothing without touching
    /// the store.
    pub fn execute(&self, query: &str) -> Result<Vec<Workout>> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        self.workouts.search(query)
    }
}

/// Logs a completed catalog workout as a tracked activity.
#[derive(Clone)]
pub struct LogWorkoutUseCase {
    workouts: WorkoutRepository,
    activities: ActivityRepository,
}

impl LogWorkoutUseCase {
    pub fn new(workouts: WorkoutRepository, activities: ActivityRepository) -> Self {
        Self {
            workouts,
            activities,
        }
    }

    /// Log a completed workout.
    ///
    /// Duration defaults to the workout's catalog duration, calories to the
    /// category/difficulty estimate, and notes to a generated summary.
    pub async fn execute(
        &self,
        user_id: &str,
        workout_id: &str,
        duration_minutes: Option<u32>,
        calories_burned: Option<u32>,
        completed_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Activity> {
        non_blank(user_id, "User ID cannot be empty")?;

        let workout = self.workouts.by_id(workout_id).await?;

        let duration = duration_minutes.unwrap_or(workout.duration_minutes);
        let calories = calories_burned.unwrap_or_else(|| estimate_calories(&workout, duration));
        let notes = notes.unwrap_or_else(|| default_notes(&workout));
        let activity_type = activity_type_for(workout.category);

        self.activities
            .track(
                user_id,
                activity_type,
                duration,
                completed_at,
                calories,
                Some(notes),
            )
            .await
    }
}

/// Map a catalog category to the activity type it is logged as.
fn activity_type_for(category: WorkoutCategory) -> ActivityType {
    match category {
        WorkoutCategory::Yoga => ActivityType::Yoga,
        WorkoutCategory::Meditation => ActivityType::Meditation,
        WorkoutCategory::Cardio | WorkoutCategory::Hiit => ActivityType::Running,
        _ => ActivityType::Workout,
    }
}

/// Estimate calories from the category base rate and difficulty multiplier.
fn estimate_calories(workout: &Workout, duration_minutes: u32) -> u32 {
    let base_per_minute = match workout.category {
        WorkoutCategory::Cardio | WorkoutCategory::Hiit => 10,
        WorkoutCategory::Strength | WorkoutCategory::FullBody => 8,
        WorkoutCategory::Flexibility | WorkoutCategory::Yoga => 5,
        WorkoutCategory::Meditation => 2,
        _ => 6,
    };

    let intensity = match workout.difficulty_level {
        DifficultyLevel::Beginner => 0.8,
        DifficultyLevel::Intermediate => 1.0,
        DifficultyLevel::Advanced => 1.2,
    };

    (f64::from(base_per_minute) * f64::from(duration_minutes) * intensity) as u32
}

/// Summary note for a logged workout.
fn default_notes(workout: &Workout) -> String {
    format!(
        "Completed {} ({} level)",
        workout.name,
        workout.difficulty_level.as_str().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(category: WorkoutCategory, difficulty: DifficultyLevel) -> Workout {
        Workout {
            id: "w1".to_string(),
            name: "Power Flow".to_string(),
            category,
            difficulty_level: difficulty,
            duration_minutes: 30,
            description: "Flow session".to_string(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn test_calorie_estimate_honors_category_and_difficulty() {
        // Cardio beginner: 10 * 30 * 0.8
        let w = workout(WorkoutCategory::Cardio, DifficultyLevel::Beginner);
        assert_eq!(estimate_calories(&w, 30), 240);

        // Strength advanced: 8 * 30 * 1.2
        let w = workout(WorkoutCategory::Strength, DifficultyLevel::Advanced);
        assert_eq!(estimate_calories(&w, 30), 288);

        // Meditation intermediate: 2 * 10 * 1.0
        let w = workout(WorkoutCategory::Meditation, DifficultyLevel::Intermediate);
        assert_eq!(estimate_calories(&w, 10), 20);

        // Unlisted category falls back to 6 per minute
        let w = workout(WorkoutCategory::Core, DifficultyLevel::Intermediate);
        assert_eq!(estimate_calories(&w, 10), 60);
    }

    #[test]
    fn test_calorie_estimate_handles_extreme_durations() {
        let w = workout(WorkoutCategory::Cardio, DifficultyLevel::Advanced);
        // Must not overflow on its way through the multiplication
        assert!(estimate_calories(&w, u32::MAX) > 0);
    }

    #[test]
    fn test_activity_type_mapping() {
        assert_eq!(activity_type_for(WorkoutCategory::Yoga), ActivityType::Yoga);
        assert_eq!(
            activity_type_for(WorkoutCategory::Meditation),
            ActivityType::Meditation
        );
        assert_eq!(activity_type_for(WorkoutCategory::Hiit), ActivityType::Running);
        assert_eq!(activity_type_for(WorkoutCategory::Cardio), ActivityType::Running);
        assert_eq!(activity_type_for(WorkoutCategory::Core), ActivityType::Workout);
    }

    #[test]
    fn test_default_notes_mention_name_and_level() {
        let w = workout(WorkoutCategory::Yoga, DifficultyLevel::Advanced);
        assert_eq!(default_notes(&w), "Completed Power Flow (advanced level)");
    }
}

// SPDX-License-Identifier: MIT

//! Activity tracking use-case.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType};
use crate::repository::ActivityRepository;
use crate::usecase::non_blank;
use chrono::{DateTime, Utc};

/// Validates tracking input and records through the activity repository.
#[derive(Clone)]
pub struct TrackActivityUseCase {
    activities: ActivityRepository,
}

impl TrackActivityUseCase {
    pub fn new(activities: ActivityRepository) -> Self {
        Self { activities }
    }

    /// Pure validation, no I/O.
    pub fn validate(user_id: &str, duration_minutes: u32) -> Result<()> {
        non_blank(user_id, "User ID cannot be empty")?;
        if duration_minutes == 0 {
            return Err(AppError::validation("Duration must be greater than 0"));
        }
        Ok(())
    }

    pub async fn execute(
        &self,
        user_id: &str,
        activity_type: ActivityType,
        duration_minutes: u32,
        date_time: DateTime<Utc>,
        calories_burned: u32,
        notes: Option<String>,
    ) -> Result<Activity> {
        Self::validate(user_id, duration_minutes)?;
        self.activities
            .track(
                user_id,
                activity_type,
                duration_minutes,
                date_time,
                calories_burned,
                notes,
            )
            .await
    }
}

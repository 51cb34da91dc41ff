// SPDX-License-Identifier: MIT

//! Logged wellness activity model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logged activity session.
///
/// Activities created while offline keep their client-generated UUID; a later
/// successful remote write stores the same id, so local and remote records
/// never diverge on identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// UUID, also the remote record id
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration_minutes: u32,
    /// When the session took place (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_time: DateTime<Utc>,
    /// Estimated calories
    pub calories_burned: u32,
    pub notes: Option<String>,
}

/// Kind of activity being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Workout,
    Meditation,
    Yoga,
    Walking,
    Running,
    Cycling,
    Swimming,
    Other,
}

impl ActivityType {
    /// Wire/storage form of the variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Workout => "WORKOUT",
            ActivityType::Meditation => "MEDITATION",
            ActivityType::Yoga => "YOGA",
            ActivityType::Walking => "WALKING",
            ActivityType::Running => "RUNNING",
            ActivityType::Cycling => "CYCLING",
            ActivityType::Swimming => "SWIMMING",
            ActivityType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WORKOUT" => Ok(ActivityType::Workout),
            "MEDITATION" => Ok(ActivityType::Meditation),
            "YOGA" => Ok(ActivityType::Yoga),
            "WALKING" => Ok(ActivityType::Walking),
            "RUNNING" => Ok(ActivityType::Running),
            "CYCLING" => Ok(ActivityType::Cycling),
            "SWIMMING" => Ok(ActivityType::Swimming),
            "OTHER" => Ok(ActivityType::Other),
            other => Err(format!("Invalid activity type: {}", other)),
        }
    }
}

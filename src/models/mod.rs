// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod chat;
pub mod user;
pub mod workout;

pub use activity::{Activity, ActivityType};
pub use chat::{ChatMessage, MessageSender};
pub use user::{DietaryPreference, User};
pub use workout::{DifficultyLevel, Workout, WorkoutCategory};

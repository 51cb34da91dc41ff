// SPDX-License-Identifier: MIT

//! Use-cases - validation wrappers over the repositories.
//!
//! Pure synchronous checks; on failure the underlying repository is never
//! touched and no I/O happens.

pub mod activity;
pub mod auth;
pub mod chat;
pub mod user;
pub mod workout;

pub use activity::TrackActivityUseCase;
pub use auth::{LoginUseCase, RegisterInput, RegisterUseCase};
pub use chat::SendMessageUseCase;
pub use user::UpdateUserProfileUseCase;
pub use workout::{LogWorkoutUseCase, SearchWorkoutsUseCase};

use crate::error::{AppError, Result};

/// Reject blank (empty or whitespace-only) input.
fn non_blank(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(())
}

/// Reject non-positive measurements.
fn positive(value: f64, message: &str) -> Result<()> {
    if value <= 0.0 {
        return Err(AppError::validation(message));
    }
    Ok(())
}

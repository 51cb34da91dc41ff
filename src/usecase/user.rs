// SPDX-License-Identifier: MIT

//! Profile update use-case.

use crate::error::{AppError, Result};
use crate::models::User;
use crate::repository::UserRepository;
use crate::usecase::{non_blank, positive};

/// Validates an edited profile and updates through the user repository.
#[derive(Clone)]
pub struct UpdateUserProfileUseCase {
    users: UserRepository,
}

impl UpdateUserProfileUseCase {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Pure validation, no I/O.
    pub fn validate(user: &User) -> Result<()> {
        non_blank(&user.name, "Name cannot be empty")?;
        if user.age == 0 {
            return Err(AppError::validation("Age must be greater than 0"));
        }
        positive(user.height, "Height must be greater than 0")?;
        positive(user.weight, "Weight must be greater than 0")?;
        non_blank(&user.profession, "Profession cannot be empty")?;
        Ok(())
    }

    pub async fn execute(&self, user: &User) -> Result<User> {
        Self::validate(user)?;
        self.users.update_profile(user).await
    }
}

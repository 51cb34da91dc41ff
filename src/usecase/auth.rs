// SPDX-License-Identifier: MIT

//! Registration and login use-cases.

use crate::error::{AppError, Result};
use crate::models::{DietaryPreference, User};
use crate::repository::UserRepository;
use crate::usecase::{non_blank, positive};
use validator::ValidateEmail;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Input for a registration attempt, as collected from the UI.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub profession: String,
    /// Raw preference string, validated against the known variants
    pub dietary_preference: String,
}

/// Validates registration input and registers through the user repository.
#[derive(Clone)]
pub struct RegisterUseCase {
    users: UserRepository,
}

impl RegisterUseCase {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Pure validation, no I/O.
    pub fn validate(input: &RegisterInput) -> Result<DietaryPreference> {
        non_blank(&input.name, "Name cannot be empty")?;
        non_blank(&input.email, "Email cannot be empty")?;
        if !input.email.validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }
        non_blank(&input.password, "Password cannot be empty")?;
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(
                "Password must be at least 6 characters",
            ));
        }
        if input.age == 0 {
            return Err(AppError::validation("Age must be greater than 0"));
        }
        positive(input.height, "Height must be greater than 0")?;
        positive(input.weight, "Weight must be greater than 0")?;
        non_blank(&input.profession, "Profession cannot be empty")?;
        input
            .dietary_preference
            .parse()
            .map_err(|_| AppError::validation("Invalid dietary preference"))
    }

    pub async fn execute(&self, input: RegisterInput) -> Result<User> {
        let dietary_preference = Self::validate(&input)?;
        self.users
            .register(
                &input.name,
                &input.email,
                &input.password,
                input.age,
                input.height,
                input.weight,
                &input.profession,
                dietary_preference,
            )
            .await
    }
}

/// Validates credentials and logs in through the user repository.
#[derive(Clone)]
pub struct LoginUseCase {
    users: UserRepository,
}

impl LoginUseCase {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User> {
        non_blank(email, "Email cannot be empty")?;
        non_blank(password, "Password cannot be empty")?;
        self.users.login(email, password).await
    }
}

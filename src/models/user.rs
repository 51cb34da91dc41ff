// SPDX-License-Identifier: MIT

//! User model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User profile stored locally and mirrored in the remote `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// UUID, also the remote record id
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    pub profession: String,
    pub dietary_preference: DietaryPreference,
    pub profile_image_url: Option<String>,
}

/// Dietary preference recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
}

impl DietaryPreference {
    /// Wire/storage form of the variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "VEGETARIAN",
            DietaryPreference::NonVegetarian => "NON_VEGETARIAN",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEGETARIAN" => Ok(DietaryPreference::Vegetarian),
            "NON_VEGETARIAN" => Ok(DietaryPreference::NonVegetarian),
            other => Err(format!("Invalid dietary preference: {}", other)),
        }
    }
}

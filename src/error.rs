// SPDX-License-Identifier: MIT

//! Application error types shared by every layer of the data engine.

/// Application error type.
///
/// Background refreshes never surface these to callers; they are logged and
/// swallowed. Foreground operations (login, registration, profile update)
/// propagate them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Remote call failed (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    #[error("User not logged in")]
    NotLoggedIn,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Build a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Build a remote error from a status code and message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        AppError::Remote {
            status,
            message: message.into(),
        }
    }

    /// True for errors produced by the use-case validation layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;

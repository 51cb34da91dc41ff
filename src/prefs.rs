// SPDX-License-Identifier: MIT

//! Persistent key-value preferences: session, theme, language.
//!
//! Backed by the `preferences` table of the local store, so session state
//! survives restarts and is cleared atomically with the rest of the app data
//! semantics.

use crate::db::Database;
use crate::error::Result;
use std::sync::Arc;

const KEY_USER_ID: &str = "user_id";
const KEY_AUTH_TOKEN: &str = "auth_token";
const KEY_IS_LOGGED_IN: &str = "is_logged_in";
const KEY_DARK_MODE: &str = "dark_mode";
const KEY_LANGUAGE: &str = "language";

/// Cached auth session for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub auth_token: String,
}

/// App preference store.
#[derive(Clone)]
pub struct Preferences {
    db: Arc<Database>,
}

impl Preferences {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // ─── Session ─────────────────────────────────────────────────

    /// Persist the signed-in session.
    pub fn save_session(&self, user_id: &str, auth_token: &str) -> Result<()> {
        self.db.set_pref(KEY_USER_ID, user_id)?;
        self.db.set_pref(KEY_AUTH_TOKEN, auth_token)?;
        self.db.set_pref(KEY_IS_LOGGED_IN, "true")?;
        tracing::debug!(user_id, "Session saved");
        Ok(())
    }

    /// Drop the cached session. Subsequent profile fetches report
    /// `NotLoggedIn` regardless of prior local data.
    pub fn clear_session(&self) -> Result<()> {
        self.db.delete_pref(KEY_USER_ID)?;
        self.db.delete_pref(KEY_AUTH_TOKEN)?;
        self.db.set_pref(KEY_IS_LOGGED_IN, "false")?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// The cached session, if a user is signed in.
    pub fn session(&self) -> Result<Option<Session>> {
        let user_id = self.db.get_pref(KEY_USER_ID)?;
        let auth_token = self.db.get_pref(KEY_AUTH_TOKEN)?;
        Ok(match (user_id, auth_token) {
            (Some(user_id), Some(auth_token)) => Some(Session { user_id, auth_token }),
            _ => None,
        })
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self
            .db
            .get_pref(KEY_IS_LOGGED_IN)?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    // ─── App Preferences ─────────────────────────────────────────

    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self
            .db
            .get_pref(KEY_DARK_MODE)?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.db
            .set_pref(KEY_DARK_MODE, if enabled { "true" } else { "false" })
    }

    /// Language code, defaulting to English.
    pub fn language(&self) -> Result<String> {
        Ok(self
            .db
            .get_pref(KEY_LANGUAGE)?
            .unwrap_or_else(|| "en".to_string()))
    }

    pub fn set_language(&self, code: &str) -> Result<()> {
        self.db.set_pref(KEY_LANGUAGE, code)
    }
}

// SPDX-License-Identifier: MIT

//! User repository: auth, profile, session and theme preferences.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{DietaryPreference, User};
use crate::prefs::Preferences;
use crate::remote::BaasClient;
use std::sync::Arc;
use uuid::Uuid;

/// Mediates between the local user record, the cached session and the
/// remote auth/user endpoints.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<Database>,
    remote: BaasClient,
    prefs: Preferences,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, remote: BaasClient, prefs: Preferences) -> Self {
        Self { db, remote, prefs }
    }

    /// Register a new account, persist it locally and auto-login.
    ///
    /// Registration itself must succeed remotely; a failed post-registration
    /// login is logged but does not fail the registration.
    #[allow(clippy::too_many_arguments)]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        age: u32,
        height: f64,
        weight: f64,
        profession: &str,
        dietary_preference: DietaryPreference,
    ) -> Result<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            age,
            height,
            weight,
            profession: profession.to_string(),
            dietary_preference,
            profile_image_url: None,
        };

        let registered = self.remote.sign_up(&user, password).await?;
        self.db.upsert_user(&registered)?;

        match self.remote.login(email, password).await {
            Ok(login) => self.prefs.save_session(&registered.id, &login.access_token)?,
            Err(e) => {
                tracing::warn!(error = %e, "Login after registration failed");
            }
        }

        tracing::info!(user_id = %registered.id, "User registered");
        Ok(registered)
    }

    /// Exchange credentials for a session and resolve the user record,
    /// local copy first.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let login = self.remote.login(email, password).await?;

        let user = if let Some(local) = self.db.get_user_by_email(email)? {
            local
        } else if let Some(user_id) = login.user_id.as_deref() {
            match self.remote.get_user(&login.access_token, user_id).await {
                Ok(remote_user) => {
                    self.db.upsert_user(&remote_user)?;
                    remote_user
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Profile fetch after login failed");
                    self.store_placeholder(email)?
                }
            }
        } else {
            self.store_placeholder(email)?
        };

        self.prefs.save_session(&user.id, &login.access_token)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Minimal profile for a login without a resolvable remote record.
    fn store_placeholder(&self, email: &str) -> Result<User> {
        let placeholder = User {
            id: Uuid::new_v4().to_string(),
            name: "User".to_string(),
            email: email.to_string(),
            age: 0,
            height: 0.0,
            weight: 0.0,
            profession: String::new(),
            dietary_preference: DietaryPreference::Vegetarian,
            profile_image_url: None,
        };
        self.db.upsert_user(&placeholder)?;
        Ok(placeholder)
    }

    /// Log out remotely and clear the cached session.
    ///
    /// The session is cleared even when the remote logout fails.
    pub async fn logout(&self) -> Result<()> {
        let session = self.prefs.session()?.ok_or(AppError::NotLoggedIn)?;

        let result = self.remote.logout(&session.auth_token).await;
        self.prefs.clear_session()?;

        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Remote logout failed, session cleared locally");
        }
        result
    }

    /// Current user's profile: local record first, remote fallback.
    pub async fn profile(&self) -> Result<User> {
        let session = self.prefs.session()?.ok_or(AppError::NotLoggedIn)?;

        if let Some(user) = self.db.get_user_by_id(&session.user_id)? {
            return Ok(user);
        }

        let user = self
            .remote
            .get_user(&session.auth_token, &session.user_id)
            .await?;
        self.db.upsert_user(&user)?;
        Ok(user)
    }

    /// Update the profile remotely and mirror the confirmed record locally.
    pub async fn update_profile(&self, user: &User) -> Result<User> {
        let session = self.prefs.session()?.ok_or(AppError::NotLoggedIn)?;

        let updated = self.remote.update_user(&session.auth_token, user).await?;
        self.db.upsert_user(&updated)?;
        Ok(updated)
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        self.prefs.is_logged_in()
    }

    pub fn dark_mode(&self) -> Result<bool> {
        self.prefs.dark_mode()
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.prefs.set_dark_mode(enabled)
    }
}

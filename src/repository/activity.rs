// SPDX-License-Identifier: MIT

//! Activity repository: offline-first writes, local-first reads.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType};
use crate::prefs::Preferences;
use crate::remote::BaasClient;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Mediates between the local activity table and the remote collection.
#[derive(Clone)]
pub struct ActivityRepository {
    db: Arc<Database>,
    remote: BaasClient,
    prefs: Preferences,
}

impl ActivityRepository {
    pub fn new(db: Arc<Database>, remote: BaasClient, prefs: Preferences) -> Self {
        Self { db, remote, prefs }
    }

    /// Track a new activity.
    ///
    /// The remote write is attempted first; on failure the locally
    /// constructed record is kept under the same client-generated id and the
    /// call still succeeds. Callers cannot distinguish a synced write from an
    /// offline one.
    pub async fn track(
        &self,
        user_id: &str,
        activity_type: ActivityType,
        duration_minutes: u32,
        date_time: DateTime<Utc>,
        calories_burned: u32,
        notes: Option<String>,
    ) -> Result<Activity> {
        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            activity_type,
            duration_minutes,
            date_time,
            calories_burned,
            notes,
        };

        let token = self.prefs.session()?.map(|s| s.auth_token);
        let remote_result = match token {
            Some(token) => self.remote.create_activity(&token, &activity).await,
            None => Err(AppError::NotLoggedIn),
        };

        match remote_result {
            Ok(confirmed) => {
                self.db.insert_activity(&confirmed)?;
                tracing::debug!(activity_id = %confirmed.id, "Activity synced");
                Ok(confirmed)
            }
            Err(e) => {
                tracing::warn!(error = %e, activity_id = %activity.id, "Remote activity write failed, keeping local copy");
                self.db.insert_activity(&activity)?;
                Ok(activity)
            }
        }
    }

    /// All activities for a user, newest first. Served from the local store;
    /// a background refresh runs independently.
    pub fn activities(&self, user_id: &str) -> Result<Vec<Activity>> {
        self.refresh_in_background(user_id);
        self.db.activities_by_user(user_id)
    }

    pub fn activities_by_type(&self, user_id: &str, activity_type: ActivityType) -> Result<Vec<Activity>> {
        self.refresh_in_background(user_id);
        self.db.activities_by_type(user_id, activity_type)
    }

    pub fn activities_by_date_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Activity>> {
        self.refresh_in_background(user_id);
        self.db.activities_by_date_range(user_id, start, end)
    }

    /// Per-type total minutes, aggregated from the local store.
    pub fn stats(&self, user_id: &str) -> Result<HashMap<ActivityType, u64>> {
        self.refresh_in_background(user_id);
        self.db.activity_stats(user_id)
    }

    /// Delete an activity. The local record goes away even when the remote
    /// delete fails.
    pub async fn delete(&self, activity_id: &str) -> Result<()> {
        let token = self.prefs.session()?.map(|s| s.auth_token);
        let remote_result = match token {
            Some(token) => self.remote.delete_activity(&token, activity_id).await,
            None => Err(AppError::NotLoggedIn),
        };

        if let Err(e) = remote_result {
            tracing::warn!(error = %e, activity_id, "Remote activity delete failed, removing local copy only");
        }
        self.db.delete_activity(activity_id)
    }

    /// Pull the remote activity list and mirror it locally.
    pub async fn refresh(&self, user_id: &str) -> Result<()> {
        let session = self.prefs.session()?.ok_or(AppError::NotLoggedIn)?;

        let remote = self.remote.list_activities(&session.auth_token, user_id).await?;
        tracing::debug!(count = remote.len(), user_id, "Fetched activities from remote");
        self.db.insert_activities(&remote)
    }

    /// Fire-and-forget remote refresh; failures are logged and swallowed.
    fn refresh_in_background(&self, user_id: &str) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let repo = self.clone();
        let user_id = user_id.to_string();
        handle.spawn(async move {
            if let Err(e) = repo.refresh(&user_id).await {
                tracing::debug!(error = %e, user_id, "Background activity refresh failed");
            }
        });
    }
}

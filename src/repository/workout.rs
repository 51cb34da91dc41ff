// SPDX-License-Identifier: MIT

//! Workout catalog repository.
//!
//! The catalog is read-mostly and never locally authoritative: every
//! successful refresh replaces the local copy wholesale.

use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::models::{DifficultyLevel, Workout, WorkoutCategory};
use crate::remote::{video, BaasClient};
use std::sync::Arc;

/// Mediates between the local catalog mirror and the remote collection.
///
/// Catalog reads are public: they authorize with the anon key rather than a
/// user session, so the catalog works before login.
#[derive(Clone)]
pub struct WorkoutRepository {
    db: Arc<Database>,
    remote: BaasClient,
    anon_key: String,
}

impl WorkoutRepository {
    pub fn new(db: Arc<Database>, remote: BaasClient, config: &Config) -> Self {
        Self {
            db,
            remote,
            anon_key: config.baas_anon_key.clone(),
        }
    }

    /// The whole catalog from the local mirror, refreshing in the background.
    pub fn all(&self) -> Result<Vec<Workout>> {
        self.refresh_in_background();
        self.db.all_workouts()
    }

    pub fn by_category(&self, category: WorkoutCategory) -> Result<Vec<Workout>> {
        self.db.workouts_by_category(category)
    }

    pub fn by_difficulty(&self, difficulty: DifficultyLevel) -> Result<Vec<Workout>> {
        self.db.workouts_by_difficulty(difficulty)
    }

    /// A single workout, local mirror first, remote fallback.
    pub async fn by_id(&self, workout_id: &str) -> Result<Workout> {
        if let Some(workout) = self.db.workout_by_id(workout_id)? {
            return Ok(workout);
        }

        let workout = fill_thumbnail(self.remote.get_workout(&self.anon_key, workout_id).await?);
        self.db.upsert_workout(&workout)?;
        Ok(workout)
    }

    /// Case-insensitive substring search over the local mirror.
    pub fn search(&self, query: &str) -> Result<Vec<Workout>> {
        self.db.search_workouts(query)
    }

    /// Replace the local catalog with a fresh remote snapshot.
    ///
    /// Refreshing twice with identical remote data leaves the local record
    /// count unchanged.
    pub async fn refresh(&self) -> Result<()> {
        let workouts: Vec<Workout> = self
            .remote
            .list_workouts(&self.anon_key)
            .await?
            .into_iter()
            .map(fill_thumbnail)
            .collect();
        tracing::debug!(count = workouts.len(), "Fetched workout catalog from remote");
        self.db.replace_workouts(&workouts)
    }

    /// Surface a catalog error only when there is no local data at all.
    pub async fn refresh_or_cached(&self) -> Result<Vec<Workout>> {
        match self.refresh().await {
            Ok(()) => self.db.all_workouts(),
            Err(e) => {
                let cached = self.db.all_workouts()?;
                if cached.is_empty() {
                    Err(e)
                } else {
                    tracing::debug!(error = %e, "Catalog refresh failed, serving cached copy");
                    Ok(cached)
                }
            }
        }
    }

    fn refresh_in_background(&self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let repo = self.clone();
        handle.spawn(async move {
            if let Err(e) = repo.refresh().await {
                tracing::debug!(error = %e, "Background catalog refresh failed");
            }
        });
    }
}

/// Derive a missing thumbnail from the record's video URL.
fn fill_thumbnail(mut workout: Workout) -> Workout {
    if workout.thumbnail_url.is_empty() {
        if let Some(thumbnail) = video::derive_thumbnail(&workout.video_url) {
            workout.thumbnail_url = thumbnail;
        }
    }
    workout
}

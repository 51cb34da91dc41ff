// SPDX-License-Identifier: MIT

//! WellnessSync data engine
//!
//! Offline-first data layer for a wellness tracking client: accounts and
//! profiles, activity tracking, a workout catalog and an AI assistant chat.
//! Remote data lives in a backend-as-a-service; a local SQLite mirror serves
//! every read and absorbs writes when the network is down.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prefs;
pub mod remote;
pub mod repository;
pub mod state;
pub mod usecase;

use config::Config;
use db::Database;
use error::Result;
use models::{ChatMessage, Workout};
use prefs::Preferences;
use remote::{AssistantClient, BaasClient};
use repository::{ActivityRepository, ChatRepository, UserRepository, WorkoutRepository};
use state::{ActivityFeed, ScreenState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The wired-up engine: one local store, one remote client per service, and
/// a repository per domain area. Cheap to clone pieces out of.
pub struct WellnessSync {
    pub config: Config,
    pub db: Arc<Database>,
    pub prefs: Preferences,
    pub users: UserRepository,
    pub activities: ActivityRepository,
    pub workouts: WorkoutRepository,
    pub chat: ChatRepository,
}

impl WellnessSync {
    /// Open the local store and wire up repositories from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let db = if config.db_path.as_os_str() == ":memory:" {
            Arc::new(Database::open_in_memory()?)
        } else {
            Arc::new(Database::open(&config.db_path)?)
        };

        let prefs = Preferences::new(db.clone());
        let baas = BaasClient::new(
            &config.baas_url,
            &config.baas_anon_key,
            config.http_timeout_secs,
        )?;
        let assistant = AssistantClient::new(
            &config.assistant_url,
            &config.assistant_api_key,
            &config.assistant_model,
            config.http_timeout_secs,
        )?;

        let users = UserRepository::new(db.clone(), baas.clone(), prefs.clone());
        let activities = ActivityRepository::new(db.clone(), baas.clone(), prefs.clone());
        let workouts = WorkoutRepository::new(db.clone(), baas, &config);
        let chat = ChatRepository::new(db.clone(), assistant);

        Ok(Self {
            config,
            db,
            prefs,
            users,
            activities,
            workouts,
            chat,
        })
    }

    // ─── Screen State ────────────────────────────────────────────

    /// Live activity feed and stats for a user.
    pub fn activity_feed(&self, user_id: &str) -> Result<ScreenState<ActivityFeed>> {
        state::activity_feed(self.db.clone(), user_id)
    }

    /// Live workout catalog.
    pub fn workout_catalog(&self) -> Result<ScreenState<Vec<Workout>>> {
        state::workout_catalog(self.db.clone())
    }

    /// Live chat thread for a user.
    pub fn chat_thread(&self, user_id: &str) -> Result<ScreenState<Vec<ChatMessage>>> {
        state::chat_thread(self.db.clone(), user_id)
    }
}

/// Initialize structured logging for the host application.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellness_sync=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

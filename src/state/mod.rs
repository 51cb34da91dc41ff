// SPDX-License-Identifier: MIT

//! Screen state holders.
//!
//! Each holder owns a background task that re-queries the local store
//! whenever a relevant table changes and publishes the fresh snapshot on a
//! watch channel. Screens hold the receiver side and render whatever the
//! latest snapshot is; dropping the holder stops its task.

use crate::db::{Database, StoreEvent};
use crate::error::Result;
use crate::models::{Activity, ActivityType, ChatMessage, Workout};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Everything the activity screen renders in one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFeed {
    /// Activities newest first.
    pub activities: Vec<Activity>,
    /// Total minutes per activity type.
    pub stats: HashMap<ActivityType, u64>,
}

/// A live snapshot of one screen's data, kept current by a background task.
pub struct ScreenState<T> {
    rx: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> ScreenState<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Query once for the initial snapshot, then re-query on every matching
    /// change event. Must be called from within a Tokio runtime.
    fn spawn<F>(db: Arc<Database>, events: &'static [StoreEvent], query: F) -> Result<Self>
    where
        F: Fn(&Database) -> Result<T> + Send + 'static,
    {
        let initial = query(&db)?;
        let (tx, rx) = watch::channel(initial);
        let mut changes = db.subscribe();

        let task = tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(event) if events.contains(&event) => {}
                    Ok(_) => continue,
                    // Lagging just means we missed intermediate states;
                    // a single re-query catches up.
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
                match query(&db) {
                    Ok(snapshot) => {
                        if tx.send(snapshot).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "Screen state re-query failed"),
                }
            }
        });

        Ok(Self { rx, task })
    }

    /// The latest snapshot.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// A receiver that can be awaited for snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }
}

impl<T> Drop for ScreenState<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// State for the activity screen: the user's feed plus per-type totals.
pub fn activity_feed(db: Arc<Database>, user_id: &str) -> Result<ScreenState<ActivityFeed>> {
    let user_id = user_id.to_string();
    ScreenState::spawn(db, &[StoreEvent::Activities], move |db| {
        Ok(ActivityFeed {
            activities: db.activities_by_user(&user_id)?,
            stats: db.activity_stats(&user_id)?,
        })
    })
}

/// State for the workout catalog screen.
pub fn workout_catalog(db: Arc<Database>) -> Result<ScreenState<Vec<Workout>>> {
    ScreenState::spawn(db, &[StoreEvent::Workouts], |db| db.all_workouts())
}

/// State for the chat screen: the user's conversation, oldest first.
pub fn chat_thread(db: Arc<Database>, user_id: &str) -> Result<ScreenState<Vec<ChatMessage>>> {
    let user_id = user_id.to_string();
    ScreenState::spawn(db, &[StoreEvent::Chat], move |db| db.chat_history(&user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageSender;
    use chrono::Utc;
    use std::time::Duration;
    use tokio::time::timeout;

    fn message(id: &str, text: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            user_id: "u1".to_string(),
            content: text.to_string(),
            sender: MessageSender::User,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_chat_thread_tracks_insertions() {
        let db = Arc::new(Database::open_in_memory().unwrap());
        let state = chat_thread(db.clone(), "u1").unwrap();
        assert!(state.current().is_empty());

        let mut rx = state.subscribe();
        db.insert_chat_message(&message("m1", "hello")).unwrap();

        timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();
        let thread = state.current();
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].content, "hello");
    }

    #[tokio::test]
    async fn test_unrelated_tables_do_not_wake_chat_state() {
        let db = Arc::new(Database::open_in_memory().unwrap());
        let state = chat_thread(db.clone(), "u1").unwrap();
        let mut rx = state.subscribe();

        db.set_pref("dark_mode", "true").unwrap();

        // No chat change, so the watch channel stays quiet
        assert!(timeout(Duration::from_millis(200), rx.changed()).await.is_err());
    }

    #[tokio::test]
    async fn test_activity_feed_includes_stats() {
        use crate::models::{Activity, ActivityType};

        let db = Arc::new(Database::open_in_memory().unwrap());
        let state = activity_feed(db.clone(), "u1").unwrap();
        let mut rx = state.subscribe();

        let activity = Activity {
            id: "a1".to_string(),
            user_id: "u1".to_string(),
            activity_type: ActivityType::Running,
            duration_minutes: 25,
            date_time: Utc::now(),
            calories_burned: 200,
            notes: None,
        };
        db.insert_activity(&activity).unwrap();

        timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();
        let feed = state.current();
        assert_eq!(feed.activities.len(), 1);
        assert_eq!(feed.stats.get(&ActivityType::Running), Some(&25));
    }
}

// SPDX-License-Identifier: MIT

//! Typed query operations for the local store.

use crate::db::{Database, StoreEvent};
use crate::error::Result;
use crate::models::{Activity, ActivityType, ChatMessage, DifficultyLevel, User, Workout, WorkoutCategory};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use std::collections::HashMap;
use std::str::FromStr;

/// Map a stored enum text column back to its typed form.
fn parse_enum<T>(idx: usize, raw: String) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
    })
}

/// Map a stored epoch-milliseconds column back to a UTC timestamp.
fn parse_millis(idx: usize, millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Integer,
            format!("Timestamp out of range: {}", millis).into(),
        )
    })
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
        height: row.get(4)?,
        weight: row.get(5)?,
        profession: row.get(6)?,
        dietary_preference: parse_enum(7, row.get(7)?)?,
        profile_image_url: row.get(8)?,
    })
}

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        user_id: row.get(1)?,
        activity_type: parse_enum(2, row.get(2)?)?,
        duration_minutes: row.get(3)?,
        date_time: parse_millis(4, row.get(4)?)?,
        calories_burned: row.get(5)?,
        notes: row.get(6)?,
    })
}

fn workout_from_row(row: &Row<'_>) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get(0)?,
        name: row.get(1)?,
        category: parse_enum(2, row.get(2)?)?,
        difficulty_level: parse_enum(3, row.get(3)?)?,
        duration_minutes: row.get(4)?,
        description: row.get(5)?,
        video_url: row.get(6)?,
        thumbnail_url: row.get(7)?,
    })
}

fn chat_from_row(row: &Row<'_>) -> rusqlite::Result<ChatMessage> {
    Ok(ChatMessage {
        id: row.get(0)?,
        user_id: row.get(1)?,
        content: row.get(2)?,
        timestamp: parse_millis(3, row.get(3)?)?,
        sender: parse_enum(4, row.get(4)?)?,
    })
}

impl Database {
    // ─── User Operations ─────────────────────────────────────────

    /// Insert or replace a user record.
    pub fn upsert_user(&self, user: &User) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO users
                 (id, name, email, age, height, weight, profession, dietary_preference, profile_image_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    user.id,
                    user.name,
                    user.email,
                    user.age,
                    user.height,
                    user.weight,
                    user.profession,
                    user.dietary_preference.as_str(),
                    user.profile_image_url,
                ],
            )?;
            Ok(())
        })?;
        self.notify(StoreEvent::Users);
        Ok(())
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row(
                    "SELECT id, name, email, age, height, weight, profession, dietary_preference,
                            profile_image_url
                     FROM users WHERE id = ?1",
                    [id],
                    user_from_row,
                )
                .optional()?)
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row(
                    "SELECT id, name, email, age, height, weight, profession, dietary_preference,
                            profile_image_url
                     FROM users WHERE email = ?1",
                    [email],
                    user_from_row,
                )
                .optional()?)
        })
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Insert or replace a single activity.
    pub fn insert_activity(&self, activity: &Activity) -> Result<()> {
        self.with_conn(|conn| {
            insert_activity_stmt(conn, activity)?;
            Ok(())
        })?;
        self.notify(StoreEvent::Activities);
        Ok(())
    }

    /// Insert or replace a batch of activities in one transaction.
    pub fn insert_activities(&self, activities: &[Activity]) -> Result<()> {
        if activities.is_empty() {
            return Ok(());
        }
        self.with_conn(|conn| {
            conn.execute_batch("BEGIN")?;
            for activity in activities {
                if let Err(e) = insert_activity_stmt(conn, activity) {
                    let _ = conn.execute_batch("ROLLBACK");
                    return Err(e);
                }
            }
            conn.execute_batch("COMMIT")?;
            Ok(())
        })?;
        self.notify(StoreEvent::Activities);
        Ok(())
    }

    pub fn activities_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, type, duration_minutes, date_time, calories_burned, notes
                 FROM activities WHERE user_id = ?1 ORDER BY date_time DESC",
            )?;
            let rows = stmt.query_map([user_id], activity_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn activities_by_type(&self, user_id: &str, activity_type: ActivityType) -> Result<Vec<Activity>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, type, duration_minutes, date_time, calories_burned, notes
                 FROM activities WHERE user_id = ?1 AND type = ?2 ORDER BY date_time DESC",
            )?;
            let rows = stmt.query_map(params![user_id, activity_type.as_str()], activity_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn activities_by_date_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Activity>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, type, duration_minutes, date_time, calories_burned, notes
                 FROM activities
                 WHERE user_id = ?1 AND date_time BETWEEN ?2 AND ?3
                 ORDER BY date_time DESC",
            )?;
            let rows = stmt.query_map(
                params![user_id, start.timestamp_millis(), end.timestamp_millis()],
                activity_from_row,
            )?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn activity_by_id(&self, id: &str) -> Result<Option<Activity>> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row(
                    "SELECT id, user_id, type, duration_minutes, date_time, calories_burned, notes
                     FROM activities WHERE id = ?1",
                    [id],
                    activity_from_row,
                )
                .optional()?)
        })
    }

    pub fn delete_activity(&self, id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM activities WHERE id = ?1", [id])?;
            Ok(())
        })?;
        self.notify(StoreEvent::Activities);
        Ok(())
    }

    /// Per-type total minutes for a user.
    pub fn activity_stats(&self, user_id: &str) -> Result<HashMap<ActivityType, u64>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT type, SUM(duration_minutes) FROM activities
                 WHERE user_id = ?1 GROUP BY type",
            )?;
            let rows = stmt.query_map([user_id], |row| {
                let activity_type: ActivityType = parse_enum(0, row.get(0)?)?;
                let minutes: u64 = row.get(1)?;
                Ok((activity_type, minutes))
            })?;
            Ok(rows.collect::<rusqlite::Result<HashMap<_, _>>>()?)
        })
    }

    // ─── Workout Catalog Operations ──────────────────────────────

    /// Insert or replace a single catalog workout.
    pub fn upsert_workout(&self, workout: &Workout) -> Result<()> {
        self.with_conn(|conn| {
            insert_workout_stmt(conn, workout)?;
            Ok(())
        })?;
        self.notify(StoreEvent::Workouts);
        Ok(())
    }

    /// Replace the whole catalog with a fresh remote snapshot (last fetch wins).
    pub fn replace_workouts(&self, workouts: &[Workout]) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch("BEGIN")?;
            let result: Result<()> = (|| {
                conn.execute("DELETE FROM workouts", [])?;
                for workout in workouts {
                    insert_workout_stmt(conn, workout)?;
                }
                Ok(())
            })();
            match result {
                Ok(()) => {
                    conn.execute_batch("COMMIT")?;
                    Ok(())
                }
                Err(e) => {
                    let _ = conn.execute_batch("ROLLBACK");
                    Err(e)
                }
            }
        })?;
        self.notify(StoreEvent::Workouts);
        Ok(())
    }

    pub fn all_workouts(&self) -> Result<Vec<Workout>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, difficulty_level, duration_minutes, description,
                        video_url, thumbnail_url
                 FROM workouts ORDER BY name",
            )?;
            let rows = stmt.query_map([], workout_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn workouts_by_category(&self, category: WorkoutCategory) -> Result<Vec<Workout>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, difficulty_level, duration_minutes, description,
                        video_url, thumbnail_url
                 FROM workouts WHERE category = ?1 ORDER BY name",
            )?;
            let rows = stmt.query_map([category.as_str()], workout_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn workouts_by_difficulty(&self, difficulty: DifficultyLevel) -> Result<Vec<Workout>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, difficulty_level, duration_minutes, description,
                        video_url, thumbnail_url
                 FROM workouts WHERE difficulty_level = ?1 ORDER BY name",
            )?;
            let rows = stmt.query_map([difficulty.as_str()], workout_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn workout_by_id(&self, id: &str) -> Result<Option<Workout>> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row(
                    "SELECT id, name, category, difficulty_level, duration_minutes, description,
                            video_url, thumbnail_url
                     FROM workouts WHERE id = ?1",
                    [id],
                    workout_from_row,
                )
                .optional()?)
        })
    }

    /// Case-insensitive substring search over name and description.
    pub fn search_workouts(&self, query: &str) -> Result<Vec<Workout>> {
        let pattern = format!("%{}%", query);
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, difficulty_level, duration_minutes, description,
                        video_url, thumbnail_url
                 FROM workouts
                 WHERE name LIKE ?1 OR description LIKE ?1
                 ORDER BY name",
            )?;
            let rows = stmt.query_map([&pattern], workout_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    // ─── Chat Operations ─────────────────────────────────────────

    pub fn insert_chat_message(&self, message: &ChatMessage) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO chat_messages (id, user_id, content, timestamp, sender)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    message.id,
                    message.user_id,
                    message.content,
                    message.timestamp.timestamp_millis(),
                    message.sender.as_str(),
                ],
            )?;
            Ok(())
        })?;
        self.notify(StoreEvent::Chat);
        Ok(())
    }

    /// Conversation history, oldest first.
    pub fn chat_history(&self, user_id: &str) -> Result<Vec<ChatMessage>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, content, timestamp, sender
                 FROM chat_messages WHERE user_id = ?1 ORDER BY timestamp ASC",
            )?;
            let rows = stmt.query_map([user_id], chat_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    pub fn clear_chat_history(&self, user_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM chat_messages WHERE user_id = ?1", [user_id])?;
            Ok(())
        })?;
        self.notify(StoreEvent::Chat);
        Ok(())
    }

    // ─── Preference Operations ───────────────────────────────────

    pub fn get_pref(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row("SELECT value FROM preferences WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?)
        })
    }

    pub fn set_pref(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
                params![key, value],
            )?;
            Ok(())
        })?;
        self.notify(StoreEvent::Preferences);
        Ok(())
    }

    pub fn delete_pref(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM preferences WHERE key = ?1", [key])?;
            Ok(())
        })?;
        self.notify(StoreEvent::Preferences);
        Ok(())
    }
}

fn insert_activity_stmt(conn: &rusqlite::Connection, activity: &Activity) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO activities
         (id, user_id, type, duration_minutes, date_time, calories_burned, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            activity.id,
            activity.user_id,
            activity.activity_type.as_str(),
            activity.duration_minutes,
            activity.date_time.timestamp_millis(),
            activity.calories_burned,
            activity.notes,
        ],
    )?;
    Ok(())
}

fn insert_workout_stmt(conn: &rusqlite::Connection, workout: &Workout) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO workouts
         (id, name, category, difficulty_level, duration_minutes, description, video_url, thumbnail_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            workout.id,
            workout.name,
            workout.category.as_str(),
            workout.difficulty_level.as_str(),
            workout.duration_minutes,
            workout.description,
            workout.video_url,
            workout.thumbnail_url,
        ],
    )?;
    Ok(())
}

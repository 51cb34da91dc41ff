// SPDX-License-Identifier: MIT

//! Initial table creation for the local store.

use crate::error::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id                  TEXT PRIMARY KEY,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL UNIQUE,
            age                 INTEGER NOT NULL,
            height              REAL NOT NULL,
            weight              REAL NOT NULL,
            profession          TEXT NOT NULL,
            dietary_preference  TEXT NOT NULL,
            profile_image_url   TEXT
        );

        CREATE TABLE IF NOT EXISTS activities (
            id                  TEXT PRIMARY KEY,
            user_id             TEXT NOT NULL,
            type                TEXT NOT NULL,
            duration_minutes    INTEGER NOT NULL,
            date_time           INTEGER NOT NULL,
            calories_burned     INTEGER NOT NULL,
            notes               TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_activities_user
            ON activities(user_id, date_time);

        CREATE TABLE IF NOT EXISTS workouts (
            id                  TEXT PRIMARY KEY,
            name                TEXT NOT NULL,
            category            TEXT NOT NULL,
            difficulty_level    TEXT NOT NULL,
            duration_minutes    INTEGER NOT NULL,
            description         TEXT NOT NULL,
            video_url           TEXT NOT NULL,
            thumbnail_url       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS chat_messages (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            content     TEXT NOT NULL,
            timestamp   INTEGER NOT NULL,
            sender      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_chat_user
            ON chat_messages(user_id, timestamp);

        CREATE TABLE IF NOT EXISTS preferences (
            key     TEXT PRIMARY KEY,
            value   TEXT NOT NULL
        );
        ",
    )?;

    tracing::debug!("Local store migrations complete");
    Ok(())
}

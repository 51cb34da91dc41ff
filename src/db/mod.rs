// SPDX-License-Identifier: MIT

//! Local store (SQLite).
//!
//! The single source of truth for the UI. Every mutation publishes a
//! table-level change event so screen state holders can re-query.

pub mod migrations;
pub mod queries;

use crate::error::{AppError, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::broadcast;

/// Capacity of the change-event channel. Laggy subscribers simply re-query,
/// so dropped events are harmless.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Table-level change event emitted after each successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Users,
    Activities,
    Workouts,
    Chat,
    Preferences,
}

/// Local SQLite database.
///
/// Concurrent writers are serialized by the connection mutex; application
/// code takes no other locks.
pub struct Database {
    conn: Mutex<Connection>,
    changes: broadcast::Sender<StoreEvent>,
}

impl Database {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run(&conn)?;

        tracing::info!(path = %path.display(), "Local store opened");
        Ok(Self::with_connection(conn))
    }

    /// Open an in-memory store (tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run(&conn)?;
        Ok(Self::with_connection(conn))
    }

    fn with_connection(conn: Connection) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            conn: Mutex::new(conn),
            changes,
        }
    }

    /// Run a closure against the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| AppError::Database(format!("Store lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Subscribe to table-level change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.changes.subscribe()
    }

    /// Publish a change event. Send errors just mean nobody is listening.
    pub(crate) fn notify(&self, event: StoreEvent) {
        let _ = self.changes.send(event);
    }
}

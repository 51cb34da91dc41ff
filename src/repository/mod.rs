// SPDX-License-Identifier: MIT

//! Repositories - reconcile the local store with the remote backend.
//!
//! Policy shared by every repository: writes try the remote first and fall
//! back to a local-only record on failure; reads serve the local snapshot
//! immediately and refresh from remote in a fire-and-forget task whose
//! failures are logged and swallowed.

pub mod activity;
pub mod chat;
pub mod user;
pub mod workout;

pub use activity::ActivityRepository;
pub use chat::ChatRepository;
pub use user::UserRepository;
pub use workout::WorkoutRepository;

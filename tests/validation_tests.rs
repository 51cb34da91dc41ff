// SPDX-License-Identifier: MIT

//! Input validation rejects bad requests before any network traffic.

mod common;

use chrono::Utc;
use wellness_sync::models::ActivityType;
use wellness_sync::usecase::{
    RegisterInput, RegisterUseCase, SendMessageUseCase, TrackActivityUseCase,
};

fn register_input() -> RegisterInput {
    RegisterInput {
        name: "Jo".to_string(),
        email: "jo@example.com".to_string(),
        password: "long enough".to_string(),
        age: 30,
        height: 172.0,
        weight: 68.5,
        profession: "Engineer".to_string(),
        dietary_preference: "VEGETARIAN".to_string(),
    }
}

#[tokio::test]
async fn test_invalid_registration_makes_no_requests() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let register = RegisterUseCase::new(engine.users.clone());

    let mut input = register_input();
    input.email = "not-an-email".to_string();
    let err = register.execute(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email format");

    let mut input = register_input();
    input.password = "short".to_string();
    assert!(register.execute(input).await.is_err());

    assert_eq!(server.hit_count(), 0);
}

#[tokio::test]
async fn test_invalid_tracking_makes_no_requests() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let track = TrackActivityUseCase::new(engine.activities.clone());

    let err = track
        .execute("u1", ActivityType::Running, 0, Utc::now(), 100, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Duration must be greater than 0");

    let err = track
        .execute("  ", ActivityType::Running, 30, Utc::now(), 100, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User ID cannot be empty");

    assert_eq!(server.hit_count(), 0);
    assert!(engine.db.activities_by_user("u1").unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_chat_message_makes_no_requests() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let send = SendMessageUseCase::new(engine.chat.clone());

    let err = send.execute("u1", "   ").await.unwrap_err();
    assert_eq!(err.to_string(), "Message cannot be empty");

    assert_eq!(server.hit_count(), 0);
    assert!(engine.chat.history("u1").unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_errors_are_flagged_as_such() {
    let engine = common::offline_engine();
    let register = RegisterUseCase::new(engine.users.clone());

    let mut input = register_input();
    input.name = String::new();
    let err = register.execute(input).await.unwrap_err();
    assert!(err.is_validation());
}

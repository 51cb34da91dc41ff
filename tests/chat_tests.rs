// SPDX-License-Identifier: MIT

//! Assistant chat: persistence order and failure behavior.

mod common;

use wellness_sync::models::MessageSender;
use wellness_sync::usecase::SendMessageUseCase;

#[tokio::test]
async fn test_send_persists_user_then_bot_message() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let send = SendMessageUseCase::new(engine.chat.clone());

    let reply = send.execute("u1", "How much water should I drink?").await.unwrap();
    assert_eq!(reply.sender, MessageSender::Bot);
    assert_eq!(reply.content, "Stay hydrated and take rest days.");

    let history = engine.chat.history("u1").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, MessageSender::User);
    assert_eq!(history[0].content, "How much water should I drink?");
    assert_eq!(history[1].sender, MessageSender::Bot);
}

#[tokio::test]
async fn test_failed_round_trip_keeps_outgoing_message() {
    let engine = common::offline_engine();
    let send = SendMessageUseCase::new(engine.chat.clone());

    assert!(send.execute("u1", "anyone there?").await.is_err());

    // The user's message survived the failed assistant call
    let history = engine.chat.history("u1").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sender, MessageSender::User);
    assert_eq!(history[0].content, "anyone there?");
}

#[tokio::test]
async fn test_clear_history_is_local_only() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let send = SendMessageUseCase::new(engine.chat.clone());

    send.execute("u1", "hello").await.unwrap();
    let hits_after_send = server.hit_count();

    engine.chat.clear_history("u1").unwrap();
    assert!(engine.chat.history("u1").unwrap().is_empty());
    assert_eq!(server.hit_count(), hits_after_send);
}

#[tokio::test]
async fn test_histories_are_per_user() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let send = SendMessageUseCase::new(engine.chat.clone());

    send.execute("u1", "hello from one").await.unwrap();
    send.execute("u2", "hello from two").await.unwrap();

    assert_eq!(engine.chat.history("u1").unwrap().len(), 2);
    assert_eq!(engine.chat.history("u2").unwrap().len(), 2);

    engine.chat.clear_history("u1").unwrap();
    assert!(engine.chat.history("u1").unwrap().is_empty());
    assert_eq!(engine.chat.history("u2").unwrap().len(), 2);
}

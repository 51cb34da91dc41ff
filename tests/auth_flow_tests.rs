// SPDX-License-Identifier: MIT

//! Registration, login and logout against the mock backend.

mod common;

use wellness_sync::error::AppError;
use wellness_sync::usecase::{LoginUseCase, RegisterInput, RegisterUseCase};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Jo".to_string(),
        email: email.to_string(),
        password: "long enough".to_string(),
        age: 30,
        height: 172.0,
        weight: 68.5,
        profession: "Engineer".to_string(),
        dietary_preference: "NON_VEGETARIAN".to_string(),
    }
}

#[tokio::test]
async fn test_register_logs_in_automatically() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let register = RegisterUseCase::new(engine.users.clone());

    let user = register.execute(register_input("jo@example.com")).await.unwrap();
    assert_eq!(user.email, "jo@example.com");

    assert!(engine.users.is_logged_in().unwrap());
    let session = engine.prefs.session().unwrap().expect("session saved");
    assert_eq!(session.user_id, user.id);
    assert_eq!(session.auth_token, common::TEST_TOKEN);

    // Profile resolves from the local mirror
    let profile = engine.users.profile().await.unwrap();
    assert_eq!(profile.id, user.id);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let register = RegisterUseCase::new(engine.users.clone());

    register.execute(register_input("jo@example.com")).await.unwrap();
    engine.users.logout().await.unwrap();

    assert!(!engine.users.is_logged_in().unwrap());
    let err = engine.users.profile().await.unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));
    assert_eq!(err.to_string(), "User not logged in");
}

#[tokio::test]
async fn test_login_resolves_local_record_by_email() {
    let server = common::spawn_backend().await;
    let engine = common::engine_for(&server.url);
    let register = RegisterUseCase::new(engine.users.clone());
    let login = LoginUseCase::new(engine.users.clone());

    let registered = register.execute(register_input("jo@example.com")).await.unwrap();
    engine.users.logout().await.unwrap();

    let logged_in = login.execute("jo@example.com", "long enough").await.unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert!(engine.users.is_logged_in().unwrap());
}

#[tokio::test]
async fn test_logout_without_session_reports_not_logged_in() {
    let engine = common::offline_engine();
    let err = engine.users.logout().await.unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));
}

#[tokio::test]
async fn test_logout_clears_session_even_when_backend_is_down() {
    let engine = common::offline_engine();
    engine.prefs.save_session("u1", "stale-token").unwrap();

    // Remote logout fails, but the cached session is gone
    assert!(engine.users.logout().await.is_err());
    assert!(!engine.users.is_logged_in().unwrap());
    assert!(engine.prefs.session().unwrap().is_none());
}

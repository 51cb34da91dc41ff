// SPDX-License-Identifier: MIT

//! Shared test fixtures: a loopback mock of the BaaS and AI endpoints, plus
//! engine builders pointed at it.

use axum::extract::{Json, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wellness_sync::config::Config;
use wellness_sync::models::{
    Activity, ActivityType, DifficultyLevel, User, Workout, WorkoutCategory,
};
use wellness_sync::WellnessSync;

/// Fixed token handed out by the mock login endpoint.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-access-token";

/// Handles to a running mock backend.
pub struct MockServer {
    pub url: String,
    /// Total HTTP requests served, across all endpoints.
    pub hits: Arc<AtomicUsize>,
    pub workouts: Arc<Mutex<Vec<Workout>>>,
    pub activities: Arc<Mutex<Vec<Activity>>>,
}

impl MockServer {
    #[allow(dead_code)]
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct Backend {
    users: Arc<Mutex<Vec<User>>>,
    activities: Arc<Mutex<Vec<Activity>>>,
    workouts: Arc<Mutex<Vec<Workout>>>,
}

/// Start a mock BaaS + AI backend on an ephemeral loopback port.
#[allow(dead_code)]
pub async fn spawn_backend() -> MockServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend = Backend {
        users: Arc::new(Mutex::new(Vec::new())),
        activities: Arc::new(Mutex::new(Vec::new())),
        workouts: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/auth/v1/signup", post(signup))
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/logout", post(logout))
        .route("/rest/v1/users", get(list_users).patch(update_user))
        .route(
            "/rest/v1/activities",
            get(list_activities)
                .post(create_activity)
                .delete(delete_activity),
        )
        .route("/rest/v1/workouts", get(list_workouts))
        .route("/v1beta/models/{model}", post(generate_content))
        .with_state(backend.clone())
        .layer(middleware::from_fn_with_state(hits.clone(), count_requests));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockServer {
        url: format!("http://{}", addr),
        hits,
        workouts: backend.workouts,
        activities: backend.activities,
    }
}

async fn count_requests(
    State(hits): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn signup(State(backend): State<Backend>, Json(user): Json<User>) -> Json<User> {
    backend
        .users
        .lock()
        .expect("users lock")
        .push(user.clone());
    Json(user)
}

async fn token(State(backend): State<Backend>) -> Json<serde_json::Value> {
    let user_id = backend
        .users
        .lock()
        .expect("users lock")
        .first()
        .map(|u| u.id.clone());
    Json(serde_json::json!({
        "access_token": TEST_TOKEN,
        "user_id": user_id,
    }))
}

async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn list_users(State(backend): State<Backend>) -> Json<Vec<User>> {
    Json(backend.users.lock().expect("users lock").clone())
}

async fn update_user(State(backend): State<Backend>, Json(user): Json<User>) -> Json<Vec<User>> {
    let mut users = backend.users.lock().expect("users lock");
    users.retain(|u| u.id != user.id);
    users.push(user.clone());
    Json(vec![user])
}

async fn list_activities(State(backend): State<Backend>) -> Json<Vec<Activity>> {
    Json(backend.activities.lock().expect("activities lock").clone())
}

async fn create_activity(
    State(backend): State<Backend>,
    Json(activity): Json<Activity>,
) -> Json<Vec<Activity>> {
    backend
        .activities
        .lock()
        .expect("activities lock")
        .push(activity.clone());
    Json(vec![activity])
}

async fn delete_activity() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn list_workouts(State(backend): State<Backend>) -> Json<Vec<Workout>> {
    Json(backend.workouts.lock().expect("workouts lock").clone())
}

async fn generate_content() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "Stay hydrated and take rest days."}]
            }
        }]
    }))
}

/// Build an engine whose remote endpoints all point at `url`.
#[allow(dead_code)]
pub fn engine_for(url: &str) -> WellnessSync {
    let config = Config {
        baas_url: url.to_string(),
        assistant_url: url.to_string(),
        ..Config::default()
    };
    WellnessSync::new(config).expect("engine")
}

/// Build an engine whose remote endpoints are unreachable.
#[allow(dead_code)]
pub fn offline_engine() -> WellnessSync {
    let config = Config {
        baas_url: "http://127.0.0.1:1".to_string(),
        assistant_url: "http://127.0.0.1:1".to_string(),
        http_timeout_secs: 1,
        ..Config::default()
    };
    WellnessSync::new(config).expect("engine")
}

#[allow(dead_code)]
pub fn sample_workout(id: &str, name: &str) -> Workout {
    Workout {
        id: id.to_string(),
        name: name.to_string(),
        category: WorkoutCategory::Cardio,
        difficulty_level: DifficultyLevel::Beginner,
        duration_minutes: 20,
        description: format!("{} session", name),
        video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
    }
}

#[allow(dead_code)]
pub fn sample_activity(id: &str, user_id: &str) -> Activity {
    Activity {
        id: id.to_string(),
        user_id: user_id.to_string(),
        activity_type: ActivityType::Running,
        duration_minutes: 30,
        date_time: chrono::Utc::now(),
        calories_burned: 250,
        notes: None,
    }
}

// SPDX-License-Identifier: MIT

//! REST client for the backend-as-a-service.
//!
//! Handles:
//! - Auth: signup, password login, logout
//! - Users, activities, workouts resource collections
//!
//! Every request carries the public `apikey` header; authenticated requests
//! add a bearer token. Filtered reads use the `column=eq.value` query
//! convention of the backend.

use crate::error::{AppError, Result};
use crate::models::{Activity, User, Workout};
use serde::Deserialize;
use std::time::Duration;

/// BaaS API client.
#[derive(Clone)]
pub struct BaasClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl BaasClient {
    /// Create a new client for the given backend.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    // ─── Auth ────────────────────────────────────────────────────

    /// Register a new account. Returns the remote-confirmed user record.
    pub async fn sign_up(&self, user: &User, password: &str) -> Result<User> {
        let url = format!("{}/auth/v1/signup", self.base_url);

        let mut body = serde_json::to_value(user)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize user: {}", e)))?;
        body["password"] = serde_json::Value::String(password.to_string());

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);

        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Invalidate the session server-side.
    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        self.check_response(response).await
    }

    // ─── Users ───────────────────────────────────────────────────

    /// Fetch a user profile by id.
    pub async fn get_user(&self, access_token: &str, user_id: &str) -> Result<User> {
        let url = format!("{}/rest/v1/users", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .query(&[("id", format!("eq.{}", user_id)), ("select", "*".to_string())])
            .send()
            .await?;

        let users: Vec<User> = self.check_response_json(response).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::remote(404, format!("User not found: {}", user_id)))
    }

    /// Update a user profile. Returns the remote-confirmed record.
    pub async fn update_user(&self, access_token: &str, user: &User) -> Result<User> {
        let url = format!("{}/rest/v1/users", self.base_url);

        let response = self
            .http
            .patch(&url)
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .query(&[("id", format!("eq.{}", user.id))])
            .json(user)
            .send()
            .await?;

        let users: Vec<User> = self.check_response_json(response).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::remote(404, format!("User not found: {}", user.id)))
    }

    // ─── Activities ──────────────────────────────────────────────

    /// List all activities for a user.
    pub async fn list_activities(&self, access_token: &str, user_id: &str) -> Result<Vec<Activity>> {
        let url = format!("{}/rest/v1/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .query(&[("user_id", format!("eq.{}", user_id)), ("select", "*".to_string())])
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Create an activity. Returns the remote-confirmed record.
    pub async fn create_activity(&self, access_token: &str, activity: &Activity) -> Result<Activity> {
        let url = format!("{}/rest/v1/activities", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .json(activity)
            .send()
            .await?;

        let mut created: Vec<Activity> = self.check_response_json(response).await?;
        if created.is_empty() {
            // Backend accepted the write but returned no representation
            return Ok(activity.clone());
        }
        Ok(created.remove(0))
    }

    /// Delete an activity by id.
    pub async fn delete_activity(&self, access_token: &str, activity_id: &str) -> Result<()> {
        let url = format!("{}/rest/v1/activities", self.base_url);

        let response = self
            .http
            .delete(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .query(&[("id", format!("eq.{}", activity_id))])
            .send()
            .await?;

        self.check_response(response).await
    }

    // ─── Workouts ────────────────────────────────────────────────

    /// Fetch the whole workout catalog.
    pub async fn list_workouts(&self, access_token: &str) -> Result<Vec<Workout>> {
        let url = format!("{}/rest/v1/workouts", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .query(&[("select", "*")])
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Fetch a single catalog workout by id.
    pub async fn get_workout(&self, access_token: &str, workout_id: &str) -> Result<Workout> {
        let url = format!("{}/rest/v1/workouts", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .query(&[("id", format!("eq.{}", workout_id)), ("select", "*".to_string())])
            .send()
            .await?;

        let workouts: Vec<Workout> = self.check_response_json(response).await?;
        workouts
            .into_iter()
            .next()
            .ok_or_else(|| AppError::remote(404, format!("Workout not found: {}", workout_id)))
    }

    // ─── Response Handling ───────────────────────────────────────

    /// Check response status and return an error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::remote(status, body))
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::remote(0, format!("JSON parse error: {}", e)))
    }
}

/// Password-grant login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Id of the authenticated user, when the backend includes it
    #[serde(default)]
    pub user_id: Option<String>,
}

// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! The BaaS anon key and the AI API key are read once at startup and kept
//! in memory for the lifetime of the engine.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend-as-a-service (REST + auth endpoints)
    pub baas_url: String,
    /// Public anon API key, sent as the `apikey` header on every request
    pub baas_anon_key: String,
    /// Base URL of the generative-AI endpoint
    pub assistant_url: String,
    /// API key for the generative-AI endpoint
    pub assistant_api_key: String,
    /// Model name used for chat completions
    pub assistant_model: String,
    /// Path of the local SQLite store
    pub db_path: PathBuf,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            baas_url: "http://localhost:54321".to_string(),
            baas_anon_key: "test_anon_key".to_string(),
            assistant_url: "http://localhost:54322".to_string(),
            assistant_api_key: "test_api_key".to_string(),
            assistant_model: "gemini-pro".to_string(),
            db_path: PathBuf::from(":memory:"),
            http_timeout_secs: 15,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if one is present. `BAAS_URL`, `BAAS_ANON_KEY`
    /// and `ASSISTANT_API_KEY` are required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            baas_url: env::var("BAAS_URL").map_err(|_| ConfigError::Missing("BAAS_URL"))?,
            baas_anon_key: env::var("BAAS_ANON_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("BAAS_ANON_KEY"))?,
            assistant_url: env::var("ASSISTANT_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            assistant_api_key: env::var("ASSISTANT_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("ASSISTANT_API_KEY"))?,
            assistant_model: env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| "gemini-pro".to_string()),
            db_path: env::var("WELLNESS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("wellness_sync.db")),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("BAAS_URL", "http://localhost:9999");
        env::set_var("BAAS_ANON_KEY", "anon");
        env::set_var("ASSISTANT_API_KEY", "key");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.baas_url, "http://localhost:9999");
        assert_eq!(config.baas_anon_key, "anon");
        assert_eq!(config.assistant_model, "gemini-pro");
        assert_eq!(config.http_timeout_secs, 15);
    }
}

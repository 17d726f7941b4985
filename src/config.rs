//! Configuration management

use anyhow::{Context, Result};

pub const DEFAULT_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directions API endpoint
    pub directions_api_url: String,

    /// Directions API key (optional, falls back to mock directions if unset)
    pub directions_api_key: Option<String>,

    /// Directions request timeout in seconds
    pub directions_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let directions_api_url = std::env::var("DIRECTIONS_API_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECTIONS_API_URL.to_string());

        let directions_api_key = std::env::var("DIRECTIONS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let directions_timeout_seconds = match std::env::var("DIRECTIONS_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse().with_context(|| {
                format!("DIRECTIONS_TIMEOUT_SECONDS must be a whole number of seconds, got {raw:?}")
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            directions_api_url,
            directions_api_key,
            directions_timeout_seconds,
        })
    }
}

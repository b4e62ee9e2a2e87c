use crate::{Config, WeatherBundle, query::CityQuery};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failures surfaced by a weather lookup. The taxonomy is status-driven:
/// 404 and 401 get dedicated variants, everything else (network errors,
/// other statuses, malformed payloads) collapses into [`FetchError::Unknown`]
/// with the detail kept for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("city not found")]
    CityNotFound,
    #[error("invalid API credential")]
    InvalidCredential,
    #[error("weather lookup failed: {0}")]
    Unknown(String),
}

impl FetchError {
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::CityNotFound,
            StatusCode::UNAUTHORIZED => FetchError::InvalidCredential,
            _ => FetchError::Unknown(format!(
                "provider returned status {status}: {}",
                truncate_body(body)
            )),
        }
    }

    /// The message shown to the user when a lookup fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::CityNotFound => "City not found.",
            FetchError::InvalidCredential => "Invalid API key.",
            FetchError::Unknown(_) => "Something went wrong.",
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions and the raw interval forecast for `city`.
    ///
    /// All-or-nothing: both requests must succeed, a failure of either
    /// fails the whole lookup so the UI never shows one half without
    /// the other.
    async fn fetch_weather(&self, city: &CityQuery) -> Result<WeatherBundle, FetchError>;
}

/// Construct the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    Ok(Box::new(openweather::OpenWeatherClient::new(api_key.to_owned())))
}

/// Cap response bodies quoted in diagnostics.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;

    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

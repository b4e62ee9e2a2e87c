use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::model::{CurrentConditions, ForecastEntry, WeatherBundle};
use crate::provider::FetchError;
use crate::query::CityQuery;

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint root. Integration tests
    /// use this to talk to a local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &CityQuery) -> Result<CurrentConditions, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%city, "fetching current conditions");

        let body = self.get(&url, city).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Unknown(format!("failed to parse current weather JSON: {e}")))?;

        let (condition, icon) = primary_weather(&parsed.weather);

        Ok(CurrentConditions {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            condition,
            icon,
        })
    }

    async fn fetch_forecast(&self, city: &CityQuery) -> Result<Vec<ForecastEntry>, FetchError> {
        let url = format!("{}/forecast", self.base_url);
        debug!(%city, "fetching 5-day forecast");

        let body = self.get(&url, city).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Unknown(format!("failed to parse forecast JSON: {e}")))?;

        let entries = parsed
            .list
            .into_iter()
            .map(|entry| {
                let (condition, icon) = primary_weather(&entry.weather);
                ForecastEntry {
                    timestamp: unix_to_utc(entry.dt),
                    slot: entry.dt_txt,
                    temperature_c: entry.main.temp,
                    condition,
                    icon,
                }
            })
            .collect();

        Ok(entries)
    }

    /// Issue one GET with the standard query set and return the body,
    /// mapping non-success statuses to domain errors before any parsing.
    async fn get(&self, url: &str, city: &CityQuery) -> Result<String, FetchError> {
        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Unknown(format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Unknown(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(FetchError::from_status(status, &body));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_weather(&self, city: &CityQuery) -> Result<WeatherBundle, FetchError> {
        let (current, forecast) =
            tokio::try_join!(self.fetch_current(city), self.fetch_forecast(city))?;

        Ok(WeatherBundle { current, forecast })
    }
}

/// First element of the `weather` array, with a fallback for the rare
/// payload where it is empty.
fn primary_weather(weather: &[OwWeather]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.description.clone(), w.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()))
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a resolved location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as the provider resolved it, e.g. "Paris".
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,
    /// Provider icon code, e.g. "01d".
    pub icon: String,
}

/// One record from the provider's 3-hour interval forecast list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    /// The provider's textual slot marker, e.g. "2026-08-21 12:00:00".
    pub slot: String,
    pub temperature_c: f64,
    pub condition: String,
    pub icon: String,
}

/// Everything one lookup fetches: current conditions plus the raw
/// interval forecast, before daily reduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastEntry>,
}

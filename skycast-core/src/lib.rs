//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client (current conditions + 5-day forecast)
//! - Input validation and reduction of the forecast to daily entries
//! - The search lifecycle state machine and its display view models
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod query;
pub mod render;
pub mod state;

pub use config::Config;
pub use forecast::reduce_to_daily;
pub use model::{CurrentConditions, ForecastEntry, WeatherBundle};
pub use provider::{FetchError, WeatherProvider, openweather::OpenWeatherClient};
pub use query::{CityQuery, ValidationError};
pub use render::{ViewContent, render, submit_control};
pub use state::{RequestToken, SearchController, SubmitOutcome, ViewState};

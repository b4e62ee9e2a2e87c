//! Pure derivation of display content from [`ViewState`].
//!
//! Nothing here performs I/O or mutates state; each function maps state
//! to a plain data description that any front end can print or draw.

use chrono::{DateTime, Utc};

use crate::model::{CurrentConditions, ForecastEntry};
use crate::state::ViewState;

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Submit control description, derived from the view state so the
/// default label and enabled flag come back on every exit from
/// `Loading`, whichever state it exits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeView {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub message: &'static str,
}

/// Card for current conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCard {
    pub location: String,
    /// Rounded whole-degree reading, e.g. "16°C".
    pub temperature: String,
    pub description: String,
    /// Provider icon code, e.g. "01d".
    pub icon: String,
    pub icon_url: String,
}

/// Card for one day of the reduced forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    /// Short weekday name, e.g. "Mon".
    pub weekday: String,
    pub temperature: String,
    pub description: String,
    pub icon: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub current: CurrentCard,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
}

/// Display content for exactly one view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Welcome(WelcomeView),
    Loading(LoadingView),
    Result(ResultView),
    Error(ErrorView),
}

pub fn render(state: &ViewState) -> ViewContent {
    match state {
        ViewState::Idle => ViewContent::Welcome(render_welcome()),
        ViewState::Loading => ViewContent::Loading(render_loading()),
        ViewState::Result { current, daily } => ViewContent::Result(render_result(current, daily)),
        ViewState::Error { message } => ViewContent::Error(render_error(message)),
    }
}

pub fn render_welcome() -> WelcomeView {
    WelcomeView {
        message: "Enter a city name to see the current weather and a 5-day forecast.",
    }
}

pub fn render_loading() -> LoadingView {
    LoadingView { message: "Loading weather data..." }
}

pub fn render_result(current: &CurrentConditions, daily: &[ForecastEntry]) -> ResultView {
    ResultView {
        current: CurrentCard {
            location: current.location_name.clone(),
            temperature: format_temperature(current.temperature_c),
            description: current.condition.clone(),
            icon: current.icon.clone(),
            icon_url: icon_url(&current.icon),
        },
        forecast: daily.iter().map(forecast_card).collect(),
    }
}

pub fn render_error(message: &str) -> ErrorView {
    ErrorView { message: message.to_owned() }
}

/// Disabled with a progress label while a fetch is in flight, the
/// default otherwise.
pub fn submit_control(state: &ViewState) -> SubmitControl {
    match state {
        ViewState::Loading => SubmitControl { enabled: false, label: "Searching..." },
        _ => SubmitControl { enabled: true, label: "Search" },
    }
}

fn forecast_card(entry: &ForecastEntry) -> ForecastCard {
    ForecastCard {
        weekday: short_weekday(entry.timestamp),
        temperature: format_temperature(entry.temperature_c),
        description: entry.condition.clone(),
        icon: entry.icon.clone(),
        icon_url: icon_url(&entry.icon),
    }
}

/// Nearest whole degree, Celsius. Halves round toward positive
/// infinity, so -2.5 renders as -2.
fn format_temperature(celsius: f64) -> String {
    format!("{}°C", (celsius + 0.5).floor() as i64)
}

fn short_weekday(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a").to_string()
}

/// Asset URL for a provider icon code.
fn icon_url(icon: &str) -> String {
    format!("{ICON_URL_BASE}/{icon}@2x.png")
}

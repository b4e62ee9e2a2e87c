//! Terminal presentation of the core's view models.

use skycast_core::ViewContent;
use skycast_core::render::{ErrorView, LoadingView, ResultView, WelcomeView};

pub fn present(content: &ViewContent) {
    match content {
        ViewContent::Welcome(view) => welcome(view),
        ViewContent::Loading(view) => loading(view),
        ViewContent::Result(view) => result(view),
        ViewContent::Error(view) => error(view),
    }
}

fn welcome(view: &WelcomeView) {
    println!("{}", view.message);
}

fn loading(view: &LoadingView) {
    println!("⏳ {}", view.message);
}

fn result(view: &ResultView) {
    println!();
    println!("📍 {}", view.current.location);
    println!(
        "   {} {}, {}",
        condition_glyph(&view.current.icon),
        view.current.temperature,
        view.current.description
    );

    if !view.forecast.is_empty() {
        println!();
        for card in &view.forecast {
            println!(
                "   {}  {} {:>5}  {}",
                card.weekday,
                condition_glyph(&card.icon),
                card.temperature,
                card.description
            );
        }
    }
    println!();
}

fn error(view: &ErrorView) {
    println!("❌ {}", view.message);
}

/// Terminal stand-ins for the provider's icon set. Codes are two digits
/// plus a day/night suffix, e.g. "01d" or "10n".
fn condition_glyph(icon: &str) -> &'static str {
    match icon.get(..2) {
        Some("01") => "☀️",
        Some("02") => "🌤️",
        Some("03" | "04") => "☁️",
        Some("09") => "🌧️",
        Some("10") => "🌦️",
        Some("11") => "⛈️",
        Some("13") => "❄️",
        Some("50") => "🌫️",
        _ => "🌡️",
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use skycast_core::{
    Config, OpenWeatherClient, SearchController, ViewState, WeatherProvider,
    provider::provider_from_config,
};

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// OpenWeather API key; overrides the configured one.
    #[arg(long, env = "OPENWEATHER_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// City to look up right away when the interactive session starts.
    /// Subcommand names win over this positional; when both are given,
    /// the subcommand runs.
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for lookups.
    Configure,

    /// Look up one city, print the result, and exit.
    Show {
        /// City name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => {
                let provider = resolve_provider(self.api_key.as_deref())?;
                show(provider.as_ref(), &city).await
            }
            None => {
                let provider = resolve_provider(self.api_key.as_deref())?;
                session::run(provider.as_ref(), self.city).await
            }
        }
    }
}

/// An explicit key (flag or environment) wins over the stored config.
fn resolve_provider(api_key: Option<&str>) -> Result<Box<dyn WeatherProvider>> {
    if let Some(key) = api_key {
        return Ok(Box::new(OpenWeatherClient::new(key.to_owned())));
    }

    let config = Config::load()?;
    provider_from_config(&config)
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key.trim().to_owned());
    config.save()?;

    println!("✅ API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// One-shot lookup. Exits non-zero when the lookup ends in an error so
/// scripts can tell the difference.
async fn show(provider: &dyn WeatherProvider, city: &str) -> Result<()> {
    let mut controller = SearchController::new();
    session::lookup(&mut controller, provider, city).await;

    if matches!(controller.state(), ViewState::Error { .. }) {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_before_a_subcommand_still_route_to_it() {
        let cli = Cli::try_parse_from(["skycast", "-v", "configure"]).expect("must parse");

        assert_eq!(cli.verbose, 1);
        assert!(cli.city.is_none());
        assert!(matches!(cli.command, Some(Command::Configure)));
    }

    #[test]
    fn api_key_flag_combines_with_show() {
        let cli = Cli::try_parse_from(["skycast", "--api-key", "KEY", "show", "Paris"])
            .expect("must parse");

        assert_eq!(cli.api_key.as_deref(), Some("KEY"));
        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city, "Paris"),
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn repeated_verbosity_combines_with_show() {
        let cli = Cli::try_parse_from(["skycast", "-vv", "show", "Paris"]).expect("must parse");

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Show { .. })));
    }

    #[test]
    fn global_flags_parse_after_the_subcommand_too() {
        let cli = Cli::try_parse_from(["skycast", "show", "Paris", "-v"]).expect("must parse");

        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Command::Show { .. })));
    }

    #[test]
    fn bare_city_starts_the_session_with_a_bootstrap() {
        let cli = Cli::try_parse_from(["skycast", "Paris"]).expect("must parse");

        assert_eq!(cli.city.as_deref(), Some("Paris"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn flagged_bare_city_still_parses() {
        let cli = Cli::try_parse_from(["skycast", "-v", "Paris"]).expect("must parse");

        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.city.as_deref(), Some("Paris"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn no_arguments_start_a_plain_session() {
        let cli = Cli::try_parse_from(["skycast"]).expect("must parse");

        assert!(cli.city.is_none());
        assert!(cli.command.is_none());
    }
}

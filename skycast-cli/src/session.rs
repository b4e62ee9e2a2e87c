//! The interactive lookup session: one prompt, one output region, and
//! the four display states cycling underneath.

use anyhow::Result;
use inquire::{InquireError, Text};
use skycast_core::{
    SearchController, SubmitOutcome, WeatherProvider,
    render::{render, submit_control},
};

use crate::output;

/// Run the prompt -> lookup -> render loop until the user cancels with
/// Esc or Ctrl-C. `initial_city` is submitted before the first prompt.
pub async fn run(provider: &dyn WeatherProvider, initial_city: Option<String>) -> Result<()> {
    let mut controller = SearchController::new();
    output::present(&render(controller.state()));

    if let Some(city) = initial_city {
        lookup(&mut controller, provider, &city).await;
    }

    loop {
        let control = submit_control(controller.state());
        let prompt = format!("🔍 {}", control.label);

        let raw = match Text::new(&prompt)
            .with_placeholder("city name")
            .with_help_message("Enter to search, Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        lookup(&mut controller, provider, &raw).await;
    }

    Ok(())
}

/// Submit one raw input and present every state the controller passes
/// through: Loading while the fetch is in flight, then Result or Error.
pub async fn lookup(controller: &mut SearchController, provider: &dyn WeatherProvider, raw: &str) {
    match controller.submit(raw) {
        SubmitOutcome::Fetch { city, token } => {
            output::present(&render(controller.state()));

            let outcome = provider.fetch_weather(&city).await;
            controller.resolve(token, outcome);

            output::present(&render(controller.state()));
        }
        SubmitOutcome::Rejected => output::present(&render(controller.state())),
    }
}

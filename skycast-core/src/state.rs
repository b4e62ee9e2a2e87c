//! Search lifecycle state machine.
//!
//! [`SearchController`] is a pure core: it owns the current [`ViewState`]
//! and decides every transition, while the one side effect (the network
//! fetch) is handed to the caller as a [`SubmitOutcome`] instruction and
//! fed back in through [`SearchController::resolve`]. The presentation
//! layer re-renders from the state after each call.

use crate::forecast::reduce_to_daily;
use crate::model::{CurrentConditions, ForecastEntry, WeatherBundle};
use crate::provider::FetchError;
use crate::query::CityQuery;

/// The four mutually exclusive display states. Entering a state fully
/// replaces whatever was shown before.
#[derive(Debug, Clone)]
pub enum ViewState {
    /// Nothing looked up yet; shows the welcome message.
    Idle,
    Loading,
    Result {
        current: CurrentConditions,
        daily: Vec<ForecastEntry>,
    },
    Error {
        message: String,
    },
}

/// Identifies one issued fetch. Resolutions carrying a superseded token
/// are discarded, so a late response can never overwrite a newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What the caller must do after a submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input validated; the controller is now `Loading` and the caller
    /// must fetch for `city`, then report back through
    /// [`SearchController::resolve`] with `token`.
    Fetch { city: CityQuery, token: RequestToken },
    /// Validation failed; the controller is already in `Error` and no
    /// fetch is wanted.
    Rejected,
}

/// Drives the Idle -> Loading -> Result/Error lifecycle.
#[derive(Debug)]
pub struct SearchController {
    state: ViewState,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self { state: ViewState::Idle, generation: 0 }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Handle one submission of raw user input.
    ///
    /// Valid input moves the machine to `Loading` and returns a fetch
    /// instruction. Invalid input short-circuits straight to `Error`
    /// without passing through `Loading` or touching the network.
    ///
    /// Every submission supersedes earlier ones, so an in-flight fetch
    /// from a previous submit can no longer resolve.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        self.generation += 1;

        match CityQuery::parse(raw) {
            Ok(city) => {
                self.state = ViewState::Loading;
                SubmitOutcome::Fetch { city, token: RequestToken(self.generation) }
            }
            Err(err) => {
                self.state = ViewState::Error { message: err.user_message().to_owned() };
                SubmitOutcome::Rejected
            }
        }
    }

    /// Feed a fetch outcome back into the machine.
    ///
    /// Returns false and leaves the state untouched when `token` does
    /// not belong to the latest submission, or when the machine already
    /// left `Loading`.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        outcome: Result<WeatherBundle, FetchError>,
    ) -> bool {
        if token.0 != self.generation || !matches!(self.state, ViewState::Loading) {
            return false;
        }

        self.state = match outcome {
            Ok(bundle) => ViewState::Result {
                current: bundle.current,
                daily: reduce_to_daily(bundle.forecast),
            },
            Err(err) => ViewState::Error { message: err.user_message().to_owned() },
        };

        true
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

//! Effects - side effects declared by the reducer
//!
//! The reducer never performs I/O. It returns these and the effect handler in
//! `main.rs` turns each one into a spawned task that reports back with a
//! `*Did*` action tagged with the same `seq`.

use crate::action::Action;
use crate::api::OpenMeteo;
use crate::state::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Geocode `location` for sequence `seq`
    ResolveLocation { seq: u64, location: String },

    /// Fetch the hourly Fahrenheit forecast for sequence `seq`
    FetchForecast { seq: u64, coords: Coordinates },
}

impl Effect {
    pub fn seq(&self) -> u64 {
        match self {
            Effect::ResolveLocation { seq, .. } | Effect::FetchForecast { seq, .. } => *seq,
        }
    }

    /// Task key unique to this step of this sequence, so spawning never
    /// replaces a task that belongs to another sequence
    pub fn task_key(&self) -> String {
        match self {
            Effect::ResolveLocation { seq, .. } => format!("resolve-{seq}"),
            Effect::FetchForecast { seq, .. } => format!("forecast-{seq}"),
        }
    }

    /// Perform the request and describe the outcome as an action.
    /// Failures become `*DidError` actions carrying the error's message.
    pub async fn execute(self, api: OpenMeteo) -> Action {
        match self {
            Effect::ResolveLocation { seq, location } => {
                match api.resolve_location(&location).await {
                    Ok(coords) => Action::LocationDidResolve { seq, coords },
                    Err(e) => Action::LocationDidError {
                        seq,
                        error: e.to_string(),
                    },
                }
            }
            Effect::FetchForecast { seq, coords } => match api.fetch_forecast(coords).await {
                Ok(forecast) => Action::ForecastDidLoad { seq, forecast },
                Err(e) => Action::ForecastDidError {
                    seq,
                    error: e.to_string(),
                },
            },
        }
    }
}

//! Actions - everything that can happen to the widget
//!
//! FRAMEWORK PATTERN: Action naming convention
//! - Prefix determines category: LocationSelect -> "location"
//! - "Did" marks an async result carried back from a spawned task
//! - Every result carries the `seq` of the sequence that produced it

use tui_dispatch::Action as _;
use tui_dispatch::ActionSummary;

use crate::state::{Coordinates, Focus, Forecast};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location category =====
    /// Intent: make this the selected location (starts a sequence if it changed)
    LocationSelect(String),

    /// Result: geocoding found coordinates for sequence `seq`
    LocationDidResolve { seq: u64, coords: Coordinates },

    /// Result: geocoding failed (no match or transport failure)
    LocationDidError { seq: u64, error: String },

    // ===== Forecast category =====
    /// Intent: re-run the sequence for the current location
    ForecastRefresh,

    /// Result: hourly forecast loaded
    ForecastDidLoad { seq: u64, forecast: Forecast },

    /// Result: forecast request failed
    ForecastDidError { seq: u64, error: String },

    // ===== City bar =====
    /// Move the city cursor by the given number of entries (wraps)
    CityCursorMove(isize),

    // ===== Custom location input =====
    CustomLocationUpdate(String),

    /// Add the typed location to the city list and select it
    CustomLocationSubmit,

    // ===== Forecast table =====
    /// Scroll the table by the given number of rows (clamped)
    TableScroll(isize),

    TableScrollReset,

    // ===== UI category =====
    UiFocusToggle,

    UiFocusSet(Focus),

    UiTerminalResize(u16, u16),

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

/// Concise summaries for the action log - forecasts can hold hundreds of rows
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::LocationDidResolve { seq, coords } => format!(
                "LocationDidResolve {{ seq: {}, lat: {:.4}, lon: {:.4} }}",
                seq, coords.latitude, coords.longitude
            ),
            Action::ForecastDidLoad { seq, forecast } => {
                format!(
                    "ForecastDidLoad {{ seq: {}, rows: {} }}",
                    seq,
                    forecast.len()
                )
            }
            Action::LocationDidError { seq, error } | Action::ForecastDidError { seq, error } => {
                let msg = if error.len() > 40 {
                    format!("{}...", &error.chars().take(37).collect::<String>())
                } else {
                    error.clone()
                };
                format!("{} {{ seq: {}, error: {:?} }}", self.name(), seq, msg)
            }
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::Action as _;

    #[test]
    fn test_summary_hides_forecast_rows() {
        let action = Action::ForecastDidLoad {
            seq: 3,
            forecast: Forecast::default(),
        };
        assert_eq!(action.summary(), "ForecastDidLoad { seq: 3, rows: 0 }");
    }

    #[test]
    fn test_summary_truncates_long_errors() {
        let action = Action::LocationDidError {
            seq: 1,
            error: "x".repeat(100),
        };
        let summary = action.summary();
        assert!(summary.starts_with("LocationDidError { seq: 1"));
        assert!(summary.contains("..."));
        assert!(summary.len() < 100);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::LocationSelect("austin".into()).name(), "LocationSelect");
        assert_eq!(Action::ForecastRefresh.name(), "ForecastRefresh");
    }
}

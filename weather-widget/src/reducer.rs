//! Reducer - pure function: (state, action) -> DispatchResult<Effect>
//!
//! FRAMEWORK PATTERN: Effect reducer
//! - All state mutations happen here
//! - Network work is requested as `Effect`s, never performed here
//!
//! The resolve -> fetch sequencer lives in this file:
//!
//! ```text
//! Idle --select--> Resolving --LocationDidResolve--> Fetching --ForecastDidLoad--> Done
//!                      |                                 |
//!                      +--LocationDidError--> Failed <---+--ForecastDidError
//! ```
//!
//! Results from an older sequence are applied like any other: there is no
//! cancellation, the last response to arrive wins.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Focus, SequencePhase};

/// Rows moved by PageUp/PageDown
pub const TABLE_PAGE: isize = 10;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location =====
        Action::LocationSelect(location) => select_location(state, location),

        Action::LocationDidResolve { seq, coords } => {
            note_stale(state, seq, "LocationDidResolve");
            state.phase = SequencePhase::Fetching;
            tracing::debug!(
                seq,
                lat = coords.latitude,
                lon = coords.longitude,
                "location resolved"
            );
            DispatchResult::changed_with(Effect::FetchForecast { seq, coords })
        }

        Action::LocationDidError { seq, error } | Action::ForecastDidError { seq, error } => {
            note_stale(state, seq, "sequence error");
            tracing::warn!(seq, %error, "sequence failed");
            state.error = Some(error);
            state.is_loading = false;
            state.phase = SequencePhase::Failed;
            DispatchResult::changed()
        }

        // ===== Forecast =====
        Action::ForecastRefresh => {
            if state.location.is_empty() {
                return DispatchResult::unchanged();
            }
            begin_sequence(state)
        }

        Action::ForecastDidLoad { seq, forecast } => {
            note_stale(state, seq, "ForecastDidLoad");
            tracing::info!(seq, rows = forecast.len(), "forecast loaded");
            state.forecast = Some(forecast);
            state.error = None;
            state.is_loading = false;
            state.table_offset = 0;
            state.phase = SequencePhase::Done;
            DispatchResult::changed()
        }

        // ===== City bar =====
        Action::CityCursorMove(delta) => {
            let len = state.cities.len() as isize;
            if len == 0 {
                return DispatchResult::unchanged();
            }
            let next = (state.city_cursor as isize + delta).rem_euclid(len) as usize;
            if next == state.city_cursor {
                return DispatchResult::unchanged();
            }
            state.city_cursor = next;
            DispatchResult::changed()
        }

        // ===== Custom location input =====
        Action::CustomLocationUpdate(text) => {
            if state.custom_location == text {
                return DispatchResult::unchanged();
            }
            state.custom_location = text;
            DispatchResult::changed()
        }

        Action::CustomLocationSubmit => {
            let custom = std::mem::take(&mut state.custom_location);
            if custom.trim().is_empty() {
                return DispatchResult::changed();
            }
            let index = state.add_city(&custom);
            state.city_cursor = index;
            state.focus = Focus::Cities;
            select_location(state, custom).mark_changed()
        }

        // ===== Forecast table =====
        Action::TableScroll(delta) => {
            let max = state.forecast_len().saturating_sub(1) as isize;
            let next = (state.table_offset as isize + delta).clamp(0, max.max(0)) as usize;
            if next == state.table_offset {
                return DispatchResult::unchanged();
            }
            state.table_offset = next;
            DispatchResult::changed()
        }

        Action::TableScrollReset => {
            if state.table_offset == 0 {
                return DispatchResult::unchanged();
            }
            state.table_offset = 0;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiFocusToggle => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        Action::UiFocusSet(focus) => {
            if state.focus == focus {
                return DispatchResult::unchanged();
            }
            state.focus = focus;
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while the spinner is visible
            if state.is_loading {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Change the selection; a new sequence starts only if it actually changed
fn select_location(state: &mut AppState, location: String) -> DispatchResult<Effect> {
    if state.location == location {
        return DispatchResult::unchanged();
    }
    if let Some(index) = state.city_index(&location) {
        state.city_cursor = index;
    }
    state.location = location;
    begin_sequence(state)
}

fn begin_sequence(state: &mut AppState) -> DispatchResult<Effect> {
    state.sequence += 1;
    state.is_loading = true;
    state.forecast = None;
    state.error = None;
    state.table_offset = 0;
    state.phase = SequencePhase::Resolving;
    tracing::info!(seq = state.sequence, location = %state.location, "sequence started");
    DispatchResult::changed_with(Effect::ResolveLocation {
        seq: state.sequence,
        location: state.location.clone(),
    })
}

fn note_stale(state: &AppState, seq: u64, what: &str) {
    if seq != state.sequence {
        tracing::debug!(
            seq,
            latest = state.sequence,
            "{} from superseded sequence applied",
            what
        );
    }
}

//! Application state - single source of truth
//!
//! FRAMEWORK PATTERN: State is immutable from component perspective
//! - Components receive `&AppState` as props
//! - Only the reducer mutates state
//! - Coordinates never live here; they only travel inside actions and effects

use chrono::{Datelike, NaiveDateTime, Timelike};
use tui_dispatch::debug::{DebugSection, DebugState};

/// Cities offered as quick-select buttons on startup
pub const SEED_CITIES: [&str; 3] = ["austin", "dallas", "houston"];

/// Location selected on startup when none is given on the command line
pub const DEFAULT_CITY: &str = "austin";

/// Spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// A resolved geographic position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One hourly forecast sample
#[derive(Clone, Debug, PartialEq)]
pub struct HourlySample {
    pub time: NaiveDateTime,
    /// `None` when the service reported `null` for this hour
    pub temperature_f: Option<f64>,
}

impl HourlySample {
    /// `M/D/YYYY H:00`, no zero padding
    pub fn time_label(&self) -> String {
        format!(
            "{}/{}/{} {}:00",
            self.time.month(),
            self.time.day(),
            self.time.year(),
            self.time.hour()
        )
    }

    pub fn temperature_label(&self) -> String {
        match self.temperature_f {
            Some(temp) => format!("{temp}"),
            None => "n/a".to_string(),
        }
    }
}

/// Hourly temperature series in service order (chronological)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forecast {
    pub samples: Vec<HourlySample>,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Where the most recently applied sequence transition left off
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SequencePhase {
    #[default]
    Idle,
    Resolving,
    Fetching,
    Done,
    Failed,
}

impl SequencePhase {
    pub fn name(self) -> &'static str {
        match self {
            SequencePhase::Idle => "idle",
            SequencePhase::Resolving => "resolving",
            SequencePhase::Fetching => "fetching",
            SequencePhase::Done => "done",
            SequencePhase::Failed => "failed",
        }
    }
}

/// Which part of the widget receives key events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Cities,
    CustomInput,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Cities => Focus::CustomInput,
            Focus::CustomInput => Focus::Cities,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Location currently driving the resolve -> fetch sequence.
    /// Empty until the first selection ("no prior selection").
    pub location: String,

    /// Quick-select cities, insertion order, no duplicates
    pub cities: Vec<String>,

    /// Uncommitted text of the custom-location input
    pub custom_location: String,

    /// Latest successful forecast (cleared when a sequence starts)
    pub forecast: Option<Forecast>,

    /// Error from the last failed sequence
    pub error: Option<String>,

    /// True while a sequence is between trigger and terminal state
    pub is_loading: bool,

    /// Id of the most recently started sequence
    pub sequence: u64,

    pub phase: SequencePhase,

    pub focus: Focus,

    /// Highlighted entry in the city bar
    pub city_cursor: usize,

    /// First visible forecast row
    pub table_offset: usize,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new() -> Self {
        Self {
            location: String::new(),
            cities: SEED_CITIES.iter().map(|city| city.to_string()).collect(),
            custom_location: String::new(),
            forecast: None,
            error: None,
            is_loading: false,
            sequence: 0,
            phase: SequencePhase::Idle,
            focus: Focus::default(),
            city_cursor: 0,
            table_offset: 0,
            tick_count: 0,
            terminal_size: (80, 24), // Default, updated on resize
        }
    }

    /// Append `city` unless already present. Returns its index.
    pub fn add_city(&mut self, city: &str) -> usize {
        match self.city_index(city) {
            Some(index) => index,
            None => {
                self.cities.push(city.to_string());
                self.cities.len() - 1
            }
        }
    }

    pub fn city_index(&self, city: &str) -> Option<usize> {
        self.cities.iter().position(|known| known == city)
    }

    /// Number of forecast rows, zero when nothing is loaded
    pub fn forecast_len(&self) -> usize {
        self.forecast.as_ref().map(Forecast::len).unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Selection")
                .entry(
                    "location",
                    if self.location.is_empty() {
                        "(none)"
                    } else {
                        &self.location
                    },
                )
                .entry("cities", self.cities.join(", "))
                .entry("custom_location", &self.custom_location),
            DebugSection::new("Sequence")
                .entry("id", self.sequence.to_string())
                .entry("phase", self.phase.name())
                .entry("is_loading", self.is_loading.to_string())
                .entry("error", self.error.as_deref().unwrap_or("(none)"))
                .entry("rows", self.forecast_len().to_string()),
            DebugSection::new("View")
                .entry("focus", format!("{:?}", self.focus))
                .entry("city_cursor", self.city_cursor.to_string())
                .entry("table_offset", self.table_offset.to_string())
                .entry(
                    "terminal_size",
                    format!("{}x{}", self.terminal_size.0, self.terminal_size.1),
                ),
        ]
    }
}

//! Weather widget - hourly Fahrenheit forecasts in the terminal
//!
//! Pick a city (or type one), the widget geocodes it with Open-Meteo, fetches
//! the hourly temperature forecast and shows it as a table.
//!
//! Built on tui-dispatch:
//! 1. Event (keyboard) -> Component.handle_event() -> Actions
//! 2. Reducer updates `AppState` and returns `Effect`s
//! 3. Effects become tasks that call [`api::OpenMeteo`]
//! 4. Tasks send `*Did*` actions back; the reducer applies them

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;

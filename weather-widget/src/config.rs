//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::state::DEFAULT_CITY;

/// Hourly temperature forecast lookup (Open-Meteo)
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "weather-widget")]
#[command(about = "Look up hourly Fahrenheit forecasts for a list of cities")]
pub struct Args {
    /// Location selected on startup; added to the city list if not already there
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Re-run the lookup every N seconds (0 disables)
    #[arg(long, short, default_value_t = 0)]
    pub refresh_interval: u64,

    /// Write logs to this file (the terminal is taken by the UI). Filter with RUST_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug mode (F12 to toggle overlay)
    #[arg(long)]
    pub debug: bool,
}

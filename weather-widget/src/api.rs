//! Open-Meteo API client
//!
//! FRAMEWORK PATTERN: Async Side Effects
//! - The reducer emits an `Effect`, the effect handler spawns a task
//! - The task calls into this module and sends a `*Did*` action back
//! - Nothing here touches application state

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::state::{Coordinates, Forecast, HourlySample};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo emits local times without offset, e.g. `2024-07-04T13:00`.
/// Seconds are accepted too.
const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn parse_time(time: &str) -> Result<NaiveDateTime, FetchError> {
    let mut last_error = None;
    for format in TIME_FORMATS {
        match NaiveDateTime::parse_from_str(time, format) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = Some(e),
        }
    }
    Err(FetchError::Malformed(match last_error {
        Some(e) => format!("bad timestamp {:?}: {}", time, e),
        None => format!("bad timestamp {:?}", time),
    }))
}

// ============================================================================
// Errors
// ============================================================================

/// Geocoding failed. Callers show both kinds the same way.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Could not geo-locate city: {0}")]
    NotFound(String),

    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Forecast lookup failed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed forecast: {0}")]
    Malformed(String),
}

/// Either step of a resolve -> fetch sequence
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlySeries,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
}

impl HourlySeries {
    fn into_forecast(self) -> Result<Forecast, FetchError> {
        if self.time.len() != self.temperature_2m.len() {
            return Err(FetchError::Malformed(format!(
                "{} timestamps but {} temperatures",
                self.time.len(),
                self.temperature_2m.len()
            )));
        }

        let samples = self
            .time
            .iter()
            .zip(self.temperature_2m)
            .map(|(time, temperature_f)| {
                let time = parse_time(time)?;
                Ok(HourlySample {
                    time,
                    temperature_f,
                })
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(Forecast { samples })
    }
}

// ============================================================================
// Client
// ============================================================================

/// Handle to the geocoding and forecast endpoints. Cheap to clone.
#[derive(Clone, Debug)]
pub struct OpenMeteo {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteo {
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODING_URL, FORECAST_URL)
    }

    /// Point the client somewhere else (mock servers in tests)
    pub fn with_base_urls(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    /// Coordinates of the best match for `location`. Single attempt.
    pub async fn resolve_location(&self, location: &str) -> Result<Coordinates, ResolutionError> {
        tracing::debug!(location, "geocoding");

        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", location), ("count", "1")])
            .send()
            .await?
            .error_for_status()?;

        let data: GeocodingResponse = response.json().await?;

        data.results
            .and_then(|results| results.into_iter().next())
            .map(|r| Coordinates {
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .ok_or_else(|| ResolutionError::NotFound(location.to_string()))
    }

    /// Hourly Fahrenheit temperatures for `coords`. Single attempt.
    pub async fn fetch_forecast(&self, coords: Coordinates) -> Result<Forecast, FetchError> {
        tracing::debug!(
            lat = coords.latitude,
            lon = coords.longitude,
            "fetching forecast"
        );

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", "temperature_2m".to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: ForecastResponse = response.json().await?;
        data.hourly.into_forecast()
    }

    /// One whole resolve -> fetch sequence
    pub async fn lookup(&self, location: &str) -> Result<Forecast, LookupError> {
        let coords = self.resolve_location(location).await?;
        Ok(self.fetch_forecast(coords).await?)
    }
}

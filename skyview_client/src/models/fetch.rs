use serde::Serialize;
use skyview::{DailyForecast, Units, WeatherReport};

/// Everything one search shows: the current report plus the reduced
/// forecast for the resolved coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherBundle {
    pub report: WeatherReport,
    pub forecasts: Vec<DailyForecast>,
}

#[derive(Serialize)]
pub struct WeatherQuery<'a> {
    pub city: &'a str,
    pub units: Units,
}

#[derive(Serialize)]
pub struct SearchQuery<'a> {
    pub q: &'a str,
}

#[derive(Serialize)]
pub struct ForecastQuery {
    pub lat: f64,
    pub lon: f64,
    pub units: Units,
}

/// Failures of the fetch chain, one per step. Messages are shown to the
/// user as is.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Weather data not found. Please check the city name.")]
    WeatherNotFound,
    #[error("Failed to get location coordinates")]
    SearchFailed,
    #[error("Location coordinates not found")]
    CoordinatesNotFound,
    #[error("Failed to fetch forecast data")]
    ForecastFailed,
    #[error("Failed to fetch weather data. Please try again.")]
    Connection(#[source] reqwest::Error),
}

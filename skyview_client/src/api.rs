use serde::de::DeserializeOwned;
use skyview::{DailyForecast, Envelope, GeocodeResult, Units, WeatherReport};

use crate::models::{
    fetch::{FetchError, ForecastQuery, SearchQuery, WeatherBundle, WeatherQuery},
    repl::FORECAST_DAYS,
};

/// Client for the skyview server's `/api` routes.
pub struct WeatherApi {
    base_url: String,
    http: reqwest::Client,
}

impl WeatherApi {
    pub fn new(url: &str) -> Self {
        let url = url.trim_end_matches('/');
        let base_url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{url}")
        };
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Current weather for a city, then its coordinates if the report lacks
    /// them, then the daily forecast for those coordinates. Each step runs
    /// only after the previous one succeeds.
    pub async fn fetch(&self, city: &str) -> Result<WeatherBundle, FetchError> {
        let report = self.current(city).await?;
        let (lat, lon) = match (report.location.lat, report.location.lon) {
            (lat, lon) if lat != 0.0 && lon != 0.0 => (lat, lon),
            _ => self.coordinates(city).await?,
        };
        let mut forecasts = self.forecast(lat, lon).await?;
        forecasts.truncate(FORECAST_DAYS);
        Ok(WeatherBundle { report, forecasts })
    }

    async fn current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let query = WeatherQuery {
            city,
            units: Units::Metric,
        };
        self.get("/api/weather", &query)
            .await?
            .ok_or(FetchError::WeatherNotFound)
    }

    async fn coordinates(&self, city: &str) -> Result<(f64, f64), FetchError> {
        let results: Vec<GeocodeResult> = self
            .get("/api/weather/search", &SearchQuery { q: city })
            .await?
            .ok_or(FetchError::SearchFailed)?;
        results
            .first()
            .map(|result| (result.lat, result.lon))
            .filter(|(lat, lon)| *lat != 0.0 && *lon != 0.0)
            .ok_or(FetchError::CoordinatesNotFound)
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<DailyForecast>, FetchError> {
        let query = ForecastQuery {
            lat,
            lon,
            units: Units::Metric,
        };
        self.get("/api/weather/forecast", &query)
            .await?
            .ok_or(FetchError::ForecastFailed)
    }

    /// Payload of a successful envelope, or `None` for any other response.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &impl serde::Serialize,
    ) -> Result<Option<T>, FetchError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await
            .map_err(FetchError::Connection)?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let envelope: Envelope<T> = response.json().await.map_err(FetchError::Connection)?;
        Ok(envelope.into_result().ok())
    }
}

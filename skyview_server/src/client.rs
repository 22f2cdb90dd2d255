use reqwest::{StatusCode, header};
use serde::de::DeserializeOwned;
use skyview::Units;
use std::time::Duration;
use tracing::debug;

use crate::models::{
    client::{WeatherClientError, truncate_body},
    config::{ApiKey, ConfigError, ProviderConfig, UserAgent},
    openweather::{OwCurrentResponse, OwForecastResponse, OwGeocodeResult},
};

/// Thin client for the OpenWeatherMap REST API. Every call is a single
/// request with no retry.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: ApiKey,
    base_url: String,
    http: reqwest::Client,
}

impl WeatherClient {
    pub fn new(config: ProviderConfig, user_agent: &UserAgent) -> Result<Self, ConfigError> {
        if config.api_key.is_missing() {
            return Err(ConfigError::MissingApiKey);
        }
        let mut headers = header::HeaderMap::new();
        let user_agent = header::HeaderValue::from_str(&user_agent.to_string())
            .unwrap_or_else(|_| header::HeaderValue::from_static("skyview"));
        headers.insert(header::USER_AGENT, user_agent);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current conditions for a city name.
    pub async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<OwCurrentResponse, WeatherClientError> {
        let result = self
            .get(
                "/data/2.5/weather",
                &[("q", city.to_string()), ("units", units.to_string())],
            )
            .await;
        match result {
            Err(WeatherClientError::Status { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Err(WeatherClientError::CityNotFound(city.to_string()))
            }
            result => result,
        }
    }

    /// Top geocoding match for a query, if any.
    pub async fn search_city(
        &self,
        query: &str,
    ) -> Result<Option<OwGeocodeResult>, WeatherClientError> {
        let results: Vec<OwGeocodeResult> = self
            .get(
                "/geo/1.0/direct",
                &[("q", query.to_string()), ("limit", "1".to_string())],
            )
            .await?;
        Ok(results.into_iter().next())
    }

    /// The 5-day feed of 3-hour samples for a coordinate.
    pub async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<OwForecastResponse, WeatherClientError> {
        self.get(
            "/data/2.5/forecast",
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", units.to_string()),
            ],
        )
        .await
    }

    async fn get<ResponseModel: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ResponseModel, WeatherClientError> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("requesting {endpoint} with {params:?}");
        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(WeatherClientError::ApiConnection)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(WeatherClientError::ApiConnection)?;
        if !status.is_success() {
            return Err(WeatherClientError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        serde_json::from_str(&body).map_err(WeatherClientError::ResponseJson)
    }
}

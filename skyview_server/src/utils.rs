use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use skyview::Envelope;
use std::collections::{BTreeMap, HashMap};
use tracing::error;

use crate::models::client::WeatherClientError;

pub fn default_server_binding_addr() -> String {
    "127.0.0.1:8000".to_string()
}

pub fn default_provider_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

pub fn default_timeout_secs() -> u64 {
    10
}

/// Deserialize a string, substituting `${VAR}` references with values from
/// the environment.
pub fn deserialize_with_envsubst<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let s = String::deserialize(deserializer)?;
    // Values holding template characters are rejected by envsubst.
    let vars: HashMap<String, String> = dotenvy::vars()
        .filter(|(key, value)| !key.contains(['$', '{', '}']) && !value.contains(['$', '{', '}']))
        .collect();
    let substituted = envsubst::substitute(s, &vars).map_err(serde::de::Error::custom)?;
    Ok(T::from(substituted))
}

/// Field-level validation messages keyed by field name.
#[derive(Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Finish a validation pass, failing if anything was recorded.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ApiError> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(ApiError::Validation(self))
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(&self.0).unwrap_or_default()
    }
}

/// Every way a request can fail once it reaches a handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(FieldErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WeatherClientError> for ApiError {
    fn from(err: WeatherClientError) -> Self {
        match err {
            WeatherClientError::CityNotFound(city) => {
                Self::NotFound(format!("City not found: {city}"))
            }
            err => Self::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match &self {
            Self::Validation(fields) => Some(fields.to_value()),
            Self::NotFound(_) => None,
            Self::Upstream(message) => {
                error!("upstream failure: {message}");
                None
            }
        };
        let envelope: Envelope<()> = Envelope::error(self.to_string(), status.as_u16(), errors);
        (status, Json(envelope)).into_response()
    }
}

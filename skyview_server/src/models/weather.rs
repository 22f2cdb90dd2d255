use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skyview::{TemperatureUnit, Units};
use utoipa::{IntoParams, ToSchema};

use crate::utils::{ApiError, FieldErrors};

/// Longest city name or search query accepted.
pub const MAX_QUERY_LEN: usize = 100;

#[derive(Builder, Debug, Default, Deserialize, IntoParams, Serialize)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct WeatherQueryParams {
    /// City to get the weather for. Required, at most 100 characters.
    pub city: Option<String>,
    /// Unit system for measurements: standard, metric or imperial.
    /// Defaults to metric.
    pub units: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct WeatherQuery {
    pub city: String,
    pub units: Units,
}

impl WeatherQueryParams {
    pub fn validate(self) -> Result<WeatherQuery, ApiError> {
        let mut errors = FieldErrors::default();
        let city = required_text(&mut errors, "city", self.city);
        let units = optional_units(&mut errors, self.units);
        errors.finish(|| WeatherQuery {
            city: city.unwrap_or_default(),
            units,
        })
    }
}

#[derive(Builder, Debug, Default, Deserialize, IntoParams, Serialize)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct CitySearchParams {
    /// City name to geocode. Required, at most 100 characters.
    pub q: Option<String>,
}

impl CitySearchParams {
    pub fn validate(self) -> Result<String, ApiError> {
        let mut errors = FieldErrors::default();
        let q = required_text(&mut errors, "q", self.q);
        errors.finish(|| q.unwrap_or_default())
    }
}

#[derive(Builder, Debug, Default, Deserialize, IntoParams, Serialize)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ForecastQueryParams {
    /// Latitude in degrees, between -90 and 90.
    pub lat: Option<String>,
    /// Longitude in degrees, between -180 and 180.
    pub lon: Option<String>,
    /// Unit system for measurements: standard, metric or imperial.
    /// Defaults to metric.
    pub units: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct ForecastQuery {
    pub lat: f64,
    pub lon: f64,
    pub units: Units,
}

impl ForecastQueryParams {
    pub fn validate(self) -> Result<ForecastQuery, ApiError> {
        let mut errors = FieldErrors::default();
        let lat = required_coordinate(&mut errors, "lat", self.lat, 90.0);
        let lon = required_coordinate(&mut errors, "lon", self.lon, 180.0);
        let units = optional_units(&mut errors, self.units);
        errors.finish(|| ForecastQuery {
            lat: lat.unwrap_or_default(),
            lon: lon.unwrap_or_default(),
            units,
        })
    }
}

/// Unvalidated conversion body. Fields stay loosely typed so that every
/// problem can be reported back at once.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RawConvertRequest {
    /// Temperature to convert, as a number or numeric string.
    pub value: Option<Value>,
    /// Scale the value is given in: celsius or fahrenheit.
    pub from: Option<Value>,
    /// Scale to convert into: celsius or fahrenheit.
    pub to: Option<Value>,
}

impl RawConvertRequest {
    pub fn validate(self) -> Result<skyview::ConvertRequest, ApiError> {
        let mut errors = FieldErrors::default();
        let value = match self.value {
            None | Some(Value::Null) => {
                errors.push("value", required_message("value"));
                None
            }
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Some(_) => None,
        };
        if value.is_none() && !errors.contains("value") {
            errors.push("value", "The value field must be a number.");
        }
        let from = required_temperature_unit(&mut errors, "from", self.from);
        let to = required_temperature_unit(&mut errors, "to", self.to);
        errors.finish(|| skyview::ConvertRequest {
            value: value.unwrap_or_default(),
            from: from.unwrap_or_default(),
            to: to.unwrap_or_default(),
        })
    }
}

#[derive(Builder, Debug, Default, Deserialize, IntoParams, Serialize)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct StatusParams {
    /// City to echo back.
    pub city: Option<String>,
    /// Units to echo back. Defaults to metric.
    pub units: Option<String>,
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    match value {
        None => {
            errors.push(field, required_message(field));
            None
        }
        Some(v) if v.chars().count() > MAX_QUERY_LEN => {
            errors.push(
                field,
                format!("The {field} field must not be greater than {MAX_QUERY_LEN} characters."),
            );
            None
        }
        Some(v) => Some(v),
    }
}

fn optional_units(errors: &mut FieldErrors, value: Option<String>) -> Units {
    match value.as_deref().map(str::trim) {
        None | Some("") => Units::default(),
        Some(units) => units.parse().unwrap_or_else(|_| {
            errors.push("units", "The selected units is invalid.");
            Units::default()
        }),
    }
}

fn required_coordinate(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<String>,
    bound: f64,
) -> Option<f64> {
    let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let Some(value) = value else {
        errors.push(field, required_message(field));
        return None;
    };
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && (-bound..=bound).contains(&v) => Some(v),
        Ok(v) if v.is_finite() => {
            errors.push(field, format!("The {field} field must be between -{bound} and {bound}."));
            None
        }
        _ => {
            errors.push(field, format!("The {field} field must be a number."));
            None
        }
    }
}

fn required_temperature_unit(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<Value>,
) -> Option<TemperatureUnit> {
    match value {
        None | Some(Value::Null) => {
            errors.push(field, required_message(field));
            None
        }
        Some(Value::String(unit)) if !unit.trim().is_empty() => {
            let unit = unit.trim().parse().ok();
            if unit.is_none() {
                errors.push(field, format!("The selected {field} is invalid."));
            }
            unit
        }
        Some(Value::String(_)) => {
            errors.push(field, required_message(field));
            None
        }
        Some(_) => {
            errors.push(field, format!("The {field} field must be a string."));
            None
        }
    }
}

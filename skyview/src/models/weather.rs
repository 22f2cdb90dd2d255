use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{condition::WeatherCondition, units::TemperatureUnit, wind::CompassPoint};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct WeatherDescriptor {
    /// Provider condition code.
    pub id: i64,
    /// Condition group, e.g. "Clouds".
    pub main: String,
    /// Condition within the group, e.g. "scattered clouds".
    pub description: String,
    /// Provider icon ID.
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Wind {
    /// Wind speed in the requested unit system.
    pub speed: f64,
    /// Bearing in degrees clockwise from north.
    pub deg: f64,
    /// Compass point the bearing falls in.
    pub direction: CompassPoint,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct CurrentWeather {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub weather: WeatherDescriptor,
    pub condition: WeatherCondition,
    pub wind: Wind,
    /// Observation time as "YYYY-MM-DD HH:MM:SS".
    pub date: String,
    /// Observation time as e.g. "Friday, 16 Oct 2026".
    pub formatted_date: String,
}

/// A resolved place. Geocoding search results share this shape.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub name: String,
    /// ISO 3166 country code.
    pub country: String,
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

pub type GeocodeResult = Location;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct DailyForecast {
    /// Calendar date as "YYYY-MM-DD".
    pub date: String,
    /// Short date, e.g. "Sat, 17 Oct".
    pub formatted_date: String,
    /// Unix timestamp of the sample representing the day.
    pub timestamp: i64,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub weather: WeatherDescriptor,
    pub condition: WeatherCondition,
    pub wind: Wind,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub location: Location,
    pub forecasts: Vec<DailyForecast>,
}

#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ConvertRequest {
    /// Temperature to convert.
    pub value: f64,
    /// Scale the value is given in.
    pub from: TemperatureUnit,
    /// Scale to convert into.
    pub to: TemperatureUnit,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ConvertResponse {
    /// Converted temperature, rounded to two decimals unless no conversion
    /// was needed.
    pub value: f64,
    /// Temperature as given.
    pub original: f64,
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub city: Option<String>,
    pub units: String,
}

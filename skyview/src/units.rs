use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Temperature scale used for explicit conversions and display.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(format!("unknown temperature unit '{other}'")),
        }
    }
}

/// Unit system the upstream provider reports measurements in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin and meters per second.
    Standard,
    /// Celsius and meters per second.
    #[default]
    Metric,
    /// Fahrenheit and miles per hour.
    Imperial,
}

impl Units {
    pub const ALL: [Units; 3] = [Self::Standard, Self::Metric, Self::Imperial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Self::Standard | Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|units| units.as_str() == s)
            .ok_or_else(|| format!("unknown units '{s}'"))
    }
}

pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    round_to_hundredths(value * 9.0 / 5.0 + 32.0)
}

pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    round_to_hundredths((value - 32.0) * 5.0 / 9.0)
}

/// Convert a temperature between scales.
///
/// Converted values are rounded to two decimal places. A no-op conversion
/// hands back the input untouched.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(value),
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
        _ => value,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Coarse weather condition used for display.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
            Self::Snowy => "snowy",
        }
    }

    /// Classify a provider's free-text weather description.
    ///
    /// Matching is a case-insensitive substring search evaluated in priority
    /// order, so "thunderstorm with light rain" is stormy and "light rain
    /// showers" is rainy. Anything unmatched (clear sky, mist, haze) is sunny.
    pub fn classify(description: &str) -> Self {
        let text = description.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| text.contains(needle));

        if has(&["thunder", "storm"]) {
            Self::Stormy
        } else if has(&["rain", "drizzle"]) {
            Self::Rainy
        } else if has(&["snow"]) {
            Self::Snowy
        } else if has(&["cloud"]) && !has(&["clear"]) {
            if has(&["scattered", "few", "broken"]) {
                Self::PartlyCloudy
            } else {
                Self::Cloudy
            }
        } else {
            Self::Sunny
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

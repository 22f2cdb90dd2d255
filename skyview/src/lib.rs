pub mod condition;
pub mod models;
pub mod units;
pub mod wind;

pub use condition::WeatherCondition;
pub use models::{
    envelope::{Envelope, EnvelopeStatus},
    weather::{
        ConvertRequest, ConvertResponse, CurrentWeather, DailyForecast, GeocodeResult, Location,
        StatusResponse, WeatherDescriptor, WeatherReport, Wind,
    },
};
pub use units::{TemperatureUnit, Units};
pub use wind::{CompassPoint, wind_direction};

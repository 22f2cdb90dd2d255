use serde::Deserialize;
use skyview::WeatherDescriptor;

#[derive(Clone, Debug, Deserialize)]
pub struct OwCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OwWeather {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl From<OwWeather> for WeatherDescriptor {
    fn from(value: OwWeather) -> Self {
        let OwWeather {
            id,
            main,
            description,
            icon,
        } = value;
        Self {
            id,
            main,
            description,
            icon,
        }
    }
}

/// Calm readings omit the bearing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OwWind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OwSys {
    #[serde(default)]
    pub country: String,
}

/// Body of `GET /data/2.5/weather`.
#[derive(Clone, Debug, Deserialize)]
pub struct OwCurrentResponse {
    pub name: String,
    pub dt: i64,
    pub coord: OwCoord,
    pub main: OwMain,
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub wind: OwWind,
    #[serde(default)]
    pub sys: OwSys,
}

/// One 3-hour step of `GET /data/2.5/forecast`.
#[derive(Clone, Debug, Deserialize)]
pub struct OwForecastSample {
    pub dt: i64,
    pub main: OwMain,
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub wind: OwWind,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OwForecastResponse {
    pub list: Vec<OwForecastSample>,
}

/// One match from `GET /geo/1.0/direct`.
#[derive(Clone, Debug, Deserialize)]
pub struct OwGeocodeResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub state: Option<String>,
}

use chrono::{DateTime, Days, NaiveDateTime, TimeZone};
use skyview::{
    CompassPoint, CurrentWeather, DailyForecast, Location, WeatherCondition, WeatherDescriptor,
    WeatherReport, Wind,
};

use crate::{
    forecast::DailySample,
    models::openweather::{OwCurrentResponse, OwGeocodeResult, OwWeather, OwWind},
};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LONG_DATE_FORMAT: &str = "%A, %d %b %Y";
const DAY_FORMAT: &str = "%Y-%m-%d";
const SHORT_DAY_FORMAT: &str = "%a, %d %b";

/// Shape a current-conditions response into the full report served by
/// `GET /api/weather`.
///
/// Only one upstream call backs this report, so `forecasts` holds a single
/// persistence entry: tomorrow, carrying today's observed readings.
pub fn format_report<Tz: TimeZone>(
    current: OwCurrentResponse,
    now: &DateTime<Tz>,
) -> WeatherReport {
    let location = format_location(&current);
    let current = format_current(current, &now.timezone());
    let forecasts = vec![persistence_forecast(&current, now)];
    WeatherReport {
        current,
        location,
        forecasts,
    }
}

pub fn format_current<Tz: TimeZone>(current: OwCurrentResponse, tz: &Tz) -> CurrentWeather {
    let observed = local_time(current.dt, tz);
    let weather = primary_weather(current.weather);
    CurrentWeather {
        temp: current.main.temp,
        feels_like: current.main.feels_like,
        temp_min: current.main.temp_min,
        temp_max: current.main.temp_max,
        humidity: current.main.humidity,
        condition: classify(&weather),
        weather,
        wind: format_wind(&current.wind),
        date: observed.format(DATE_TIME_FORMAT).to_string(),
        formatted_date: observed.format(LONG_DATE_FORMAT).to_string(),
    }
}

pub fn format_location(current: &OwCurrentResponse) -> Location {
    Location {
        name: current.name.clone(),
        country: current.sys.country.clone(),
        state: None,
        lat: current.coord.lat,
        lon: current.coord.lon,
    }
}

pub fn format_geocode(result: OwGeocodeResult) -> Location {
    let OwGeocodeResult {
        name,
        lat,
        lon,
        country,
        state,
    } = result;
    Location {
        name,
        country,
        state,
        lat,
        lon,
    }
}

pub fn format_daily<Tz: TimeZone>(day: DailySample, tz: &Tz) -> DailyForecast {
    let DailySample { date, sample } = day;
    let weather = primary_weather(sample.weather);
    DailyForecast {
        date: date.format(DAY_FORMAT).to_string(),
        formatted_date: local_time(sample.dt, tz)
            .format(SHORT_DAY_FORMAT)
            .to_string(),
        timestamp: sample.dt,
        temp: sample.main.temp,
        temp_min: sample.main.temp_min,
        temp_max: sample.main.temp_max,
        humidity: sample.main.humidity,
        condition: classify(&weather),
        weather,
        wind: format_wind(&sample.wind),
    }
}

fn persistence_forecast<Tz: TimeZone>(
    current: &CurrentWeather,
    now: &DateTime<Tz>,
) -> DailyForecast {
    let tomorrow = now
        .clone()
        .checked_add_days(Days::new(1))
        .unwrap_or_else(|| now.clone());
    let local = tomorrow.naive_local();
    DailyForecast {
        date: local.format(DAY_FORMAT).to_string(),
        formatted_date: local.format(SHORT_DAY_FORMAT).to_string(),
        timestamp: tomorrow.timestamp(),
        temp: current.temp,
        temp_min: current.temp_min,
        temp_max: current.temp_max,
        humidity: current.humidity,
        weather: current.weather.clone(),
        condition: current.condition,
        wind: current.wind.clone(),
    }
}

fn format_wind(wind: &OwWind) -> Wind {
    Wind {
        speed: wind.speed,
        deg: wind.deg,
        direction: CompassPoint::from_degrees(wind.deg),
    }
}

fn primary_weather(weather: Vec<OwWeather>) -> WeatherDescriptor {
    weather
        .into_iter()
        .next()
        .map(WeatherDescriptor::from)
        .unwrap_or_else(|| WeatherDescriptor {
            id: 0,
            main: "Unknown".to_string(),
            description: String::new(),
            icon: String::new(),
        })
}

fn classify(weather: &WeatherDescriptor) -> WeatherCondition {
    if weather.description.trim().is_empty() {
        WeatherCondition::classify(&weather.main)
    } else {
        WeatherCondition::classify(&weather.description)
    }
}

fn local_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> NaiveDateTime {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(tz)
        .naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openweather::{OwCoord, OwForecastSample, OwMain, OwSys};
    use chrono::{NaiveDate, Utc};

    fn current() -> OwCurrentResponse {
        OwCurrentResponse {
            name: "London".to_string(),
            // 2026-10-16 14:05:09 UTC
            dt: 1_792_159_509,
            coord: OwCoord {
                lat: 51.5085,
                lon: -0.1257,
            },
            main: OwMain {
                temp: 14.2,
                feels_like: 13.1,
                temp_min: 12.9,
                temp_max: 15.4,
                humidity: 71,
            },
            weather: vec![OwWeather {
                id: 802,
                main: "Clouds".to_string(),
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }],
            wind: OwWind {
                speed: 4.6,
                deg: 230.0,
            },
            sys: OwSys {
                country: "GB".to_string(),
            },
        }
    }

    #[test]
    fn current_weather_is_reshaped() {
        let weather = format_current(current(), &Utc);
        assert_eq!(weather.temp, 14.2);
        assert_eq!(weather.humidity, 71);
        assert_eq!(weather.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(weather.wind.direction, CompassPoint::SW);
        assert_eq!(weather.wind.deg, 230.0);
        assert_eq!(weather.date, "2026-10-16 14:05:09");
        assert_eq!(weather.formatted_date, "Friday, 16 Oct 2026");
    }

    #[test]
    fn report_carries_location_and_tomorrow() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 14, 10, 0).unwrap();
        let report = format_report(current(), &now);

        assert_eq!(report.location.name, "London");
        assert_eq!(report.location.country, "GB");
        assert_eq!(report.location.lat, 51.5085);
        assert_eq!(report.forecasts.len(), 1);
        let tomorrow = &report.forecasts[0];
        assert_eq!(tomorrow.date, "2026-10-17");
        assert_eq!(tomorrow.formatted_date, "Sat, 17 Oct");
        assert_eq!(tomorrow.temp, report.current.temp);
    }

    #[test]
    fn daily_forecast_uses_sample_values() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let dt = Utc
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap()
            .timestamp();
        let day = DailySample {
            date,
            sample: OwForecastSample {
                dt,
                main: OwMain {
                    temp: 9.5,
                    feels_like: 7.0,
                    temp_min: 8.1,
                    temp_max: 10.2,
                    humidity: 88,
                },
                weather: vec![OwWeather {
                    id: 500,
                    main: "Rain".to_string(),
                    description: "light rain".to_string(),
                    icon: "10d".to_string(),
                }],
                wind: OwWind {
                    speed: 6.2,
                    deg: 11.25,
                },
            },
        };
        let forecast = format_daily(day, &Utc);

        assert_eq!(forecast.date, "2026-10-18");
        assert_eq!(forecast.formatted_date, "Sun, 18 Oct");
        assert_eq!(forecast.timestamp, dt);
        assert_eq!(forecast.temp_min, 8.1);
        assert_eq!(forecast.condition, WeatherCondition::Rainy);
        assert_eq!(forecast.wind.direction, CompassPoint::NNE);
    }

    #[test]
    fn missing_weather_falls_back_to_sunny() {
        let mut current = current();
        current.weather.clear();
        let weather = format_current(current, &Utc);
        assert_eq!(weather.weather.main, "Unknown");
        assert_eq!(weather.condition, WeatherCondition::Sunny);
    }

    #[test]
    fn geocode_keeps_state() {
        let location = format_geocode(OwGeocodeResult {
            name: "Springfield".to_string(),
            lat: 39.8,
            lon: -89.64,
            country: "US".to_string(),
            state: Some("Illinois".to_string()),
        });
        assert_eq!(location.state.as_deref(), Some("Illinois"));
    }
}

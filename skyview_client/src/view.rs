use skyview::{CompassPoint, TemperatureUnit, Units, WeatherCondition, units};

use crate::models::fetch::WeatherBundle;

const HUMIDITY_BAR_WIDTH: usize = 20;

/// Reports and forecasts are always fetched in metric.
const FETCHED_UNITS: Units = Units::Metric;

pub fn condition_icon(condition: WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Sunny => "☀",
        WeatherCondition::PartlyCloudy => "⛅",
        WeatherCondition::Cloudy => "☁",
        WeatherCondition::Rainy => "🌧",
        WeatherCondition::Stormy => "⛈",
        WeatherCondition::Snowy => "❄",
    }
}

/// A Celsius reading in the display unit, rounded to a whole degree.
pub fn format_temp(celsius: f64, unit: TemperatureUnit) -> String {
    let value = units::convert(celsius, TemperatureUnit::Celsius, unit).round();
    format!("{value:.0}{}", unit.symbol())
}

pub fn humidity_bar(humidity: u8) -> String {
    let filled = (usize::from(humidity.min(100)) * HUMIDITY_BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(HUMIDITY_BAR_WIDTH - filled)
    )
}

/// Upper-case the first letter of every word.
fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// What the main panel shows: current conditions or one forecast day.
struct Panel<'a> {
    heading: String,
    temp: f64,
    condition: WeatherCondition,
    description: &'a str,
    range: String,
    wind_speed: f64,
    wind_direction: CompassPoint,
    humidity: u8,
}

/// Render a fetched bundle. `selected` is a zero-based forecast index; when
/// it's `None` or out of range the current conditions fill the main panel.
pub fn render(bundle: &WeatherBundle, unit: TemperatureUnit, selected: Option<usize>) -> String {
    let WeatherBundle { report, forecasts } = bundle;
    let selected = selected.and_then(|idx| forecasts.get(idx).map(|day| (idx, day)));
    let panel = match selected {
        Some((_, day)) => Panel {
            heading: format!("Forecast for {}", day.formatted_date),
            temp: day.temp,
            condition: day.condition,
            description: &day.weather.description,
            range: format!(
                "Low {}  High {}",
                format_temp(day.temp_min, unit),
                format_temp(day.temp_max, unit)
            ),
            wind_speed: day.wind.speed,
            wind_direction: day.wind.direction,
            humidity: day.humidity,
        },
        None => {
            let current = &report.current;
            Panel {
                heading: "Now".to_string(),
                temp: current.temp,
                condition: current.condition,
                description: &current.weather.description,
                range: format!(
                    "Feels like {}  Low {}  High {}",
                    format_temp(current.feels_like, unit),
                    format_temp(current.temp_min, unit),
                    format_temp(current.temp_max, unit)
                ),
                wind_speed: current.wind.speed,
                wind_direction: current.wind.direction,
                humidity: current.humidity,
            }
        }
    };

    let description = if panel.description.trim().is_empty() {
        panel.condition.as_str().to_string()
    } else {
        capitalize(panel.description)
    };
    let mut lines = vec![
        format!("{}, {}", report.location.name, report.location.country),
        report.current.formatted_date.clone(),
        String::new(),
        panel.heading,
        format!(
            "  {} {}  {description}",
            condition_icon(panel.condition),
            format_temp(panel.temp, unit)
        ),
        format!("  {}", panel.range),
        format!(
            "  Wind      {} {} {}",
            panel.wind_speed,
            FETCHED_UNITS.wind_speed_label(),
            panel.wind_direction
        ),
        format!(
            "  Humidity  {}% {}",
            panel.humidity,
            humidity_bar(panel.humidity)
        ),
    ];

    if !forecasts.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}-Day Forecast", forecasts.len()));
        for (idx, day) in forecasts.iter().enumerate() {
            let marker = match selected {
                Some((selected, _)) if selected == idx => ">",
                _ => " ",
            };
            lines.push(format!(
                "{marker} /{}  {}  {} {} / {}",
                idx + 1,
                day.formatted_date,
                condition_icon(day.condition),
                format_temp(day.temp_min, unit),
                format_temp(day.temp_max, unit)
            ));
        }
    }
    lines.join("\n")
}

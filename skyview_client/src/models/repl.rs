use skyview::TemperatureUnit;

/// Forecast days a user can pick from.
pub const FORECAST_DAYS: usize = 3;

/// A line of user input, parsed.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Look up a city.
    Search(String),
    /// Switch the display unit.
    Unit(TemperatureUnit),
    /// Show a forecast day, numbered from 1.
    SelectDay(usize),
    /// Go back to current conditions.
    Current,
    Help,
    /// Anything starting with `/` that isn't a command.
    Unknown(String),
    Empty,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix('/') else {
            return if input.is_empty() {
                Self::Empty
            } else {
                Self::Search(input.to_string())
            };
        };
        match command {
            "c" => Self::Unit(TemperatureUnit::Celsius),
            "f" => Self::Unit(TemperatureUnit::Fahrenheit),
            "0" => Self::Current,
            "help" | "h" | "?" => Self::Help,
            other => match other.parse::<usize>() {
                Ok(day) if (1..=FORECAST_DAYS).contains(&day) => Self::SelectDay(day),
                _ => Self::Unknown(input.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_commands() {
        assert_eq!(Command::parse("  London "), Command::Search("London".to_string()));
        assert_eq!(
            Command::parse("New York"),
            Command::Search("New York".to_string())
        );
        assert_eq!(Command::parse("/f"), Command::Unit(TemperatureUnit::Fahrenheit));
        assert_eq!(Command::parse("/c"), Command::Unit(TemperatureUnit::Celsius));
        assert_eq!(Command::parse("/2"), Command::SelectDay(2));
        assert_eq!(Command::parse("/0"), Command::Current);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/4"), Command::Unknown("/4".to_string()));
        assert_eq!(Command::parse("/k"), Command::Unknown("/k".to_string()));
        assert_eq!(Command::parse("   "), Command::Empty);
    }
}

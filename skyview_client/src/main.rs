use pico_args::Arguments;
use rustyline::{DefaultEditor, error::ReadlineError};
use skyview::TemperatureUnit;

mod api;
mod models;
mod view;

use api::WeatherApi;
use models::{
    fetch::{FetchError, WeatherBundle},
    repl::Command,
};

const HISTORY_FILE: &str = ".skyview_history";

const HELP: &str = "\
Look up current weather and a short forecast

USAGE:
  skyview_client [OPTIONS]

OPTIONS:
  --url     Server URL                  [default: http://127.0.0.1:8000]
  --unit    celsius or fahrenheit       [default: celsius]

FLAGS:
  -h, --help    Print help information
";

const COMMANDS: &str = "\
Type a city name to look it up.
  /c, /f    Show temperatures in Celsius or Fahrenheit
  /1 - /3   Show a forecast day
  /0        Back to current conditions
  /help     Show this message
  Ctrl-D    Quit";

struct Args {
    url: String,
    unit: TemperatureUnit,
}

/// What the REPL should do after a command.
#[derive(Debug, PartialEq)]
enum Step {
    Fetch(String),
    Print(String),
    Nothing,
}

/// Display state between commands. Only the last successful search is kept.
struct Session {
    unit: TemperatureUnit,
    bundle: Option<WeatherBundle>,
    selected: Option<usize>,
}

impl Session {
    fn new(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            bundle: None,
            selected: None,
        }
    }

    fn render(&self) -> Option<String> {
        self.bundle
            .as_ref()
            .map(|bundle| view::render(bundle, self.unit, self.selected))
    }

    fn step(&mut self, command: Command) -> Step {
        match command {
            Command::Search(city) => Step::Fetch(city),
            Command::Unit(unit) => {
                self.unit = unit;
                Step::Print(
                    self.render()
                        .unwrap_or_else(|| format!("Showing temperatures in {}", unit.symbol())),
                )
            }
            Command::SelectDay(day) => {
                let Some(bundle) = &self.bundle else {
                    return Step::Print("Search for a city first.".to_string());
                };
                if day > bundle.forecasts.len() {
                    return Step::Print(format!("No forecast for day {day}."));
                }
                self.selected = Some(day - 1);
                Step::Print(self.render().unwrap_or_default())
            }
            Command::Current => {
                self.selected = None;
                Step::Print(
                    self.render()
                        .unwrap_or_else(|| "Search for a city first.".to_string()),
                )
            }
            Command::Help => Step::Print(COMMANDS.to_string()),
            Command::Unknown(input) => {
                Step::Print(format!("Unknown command {input}. Type /help for commands."))
            }
            Command::Empty => Step::Nothing,
        }
    }

    /// Take in the outcome of a search. A failed search keeps the previous
    /// result around but clears the day selection.
    fn receive(&mut self, result: Result<WeatherBundle, FetchError>) -> String {
        self.selected = None;
        match result {
            Ok(bundle) => {
                self.bundle = Some(bundle);
                self.render().unwrap_or_default()
            }
            Err(err) => format!("Error: {err}"),
        }
    }
}

/// Shown while a search's fetch chain runs.
fn lookup_notice(city: &str) -> String {
    format!("Looking up {city}...")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        println!("{}", HELP);
        std::process::exit(0);
    }

    let args = Args {
        url: pargs
            .value_from_str("--url")
            .unwrap_or("http://127.0.0.1:8000".into()),
        unit: pargs.value_from_str("--unit").unwrap_or_default(),
    };
    let Args { url, unit } = args;

    let api = WeatherApi::new(&url);
    let mut rl = DefaultEditor::new()?;
    let history_path = dirs_next::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(path) = &history_path {
        // No history yet on first run.
        let _ = rl.load_history(path);
    }

    println!("{COMMANDS}");
    let mut session = Session::new(unit);
    loop {
        match rl.readline(">> ") {
            Ok(input) => {
                rl.add_history_entry(input.as_str())?;
                match session.step(Command::parse(&input)) {
                    Step::Fetch(city) => {
                        println!("{}", lookup_notice(&city));
                        let result = api.fetch(&city).await;
                        println!("{}", session.receive(result));
                    }
                    Step::Print(text) => println!("{text}"),
                    Step::Nothing => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history_path {
        rl.save_history(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::tests::bundle;

    #[test]
    fn commands_before_a_search() {
        let mut session = Session::new(TemperatureUnit::Celsius);
        assert_eq!(
            session.step(Command::parse("/2")),
            Step::Print("Search for a city first.".to_string())
        );
        assert_eq!(
            session.step(Command::parse("/f")),
            Step::Print("Showing temperatures in °F".to_string())
        );
        assert_eq!(session.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(
            session.step(Command::parse("Oslo")),
            Step::Fetch("Oslo".to_string())
        );
        assert_eq!(session.step(Command::parse("")), Step::Nothing);
    }

    #[test]
    fn searches_announce_the_lookup() {
        let mut session = Session::new(TemperatureUnit::Celsius);
        let Step::Fetch(city) = session.step(Command::parse("  Buenos Aires ")) else {
            panic!("expected a fetch");
        };
        assert_eq!(lookup_notice(&city), "Looking up Buenos Aires...");
    }

    #[test]
    fn selecting_days_after_a_search() {
        let mut session = Session::new(TemperatureUnit::Celsius);
        let text = session.receive(Ok(bundle()));
        assert!(text.contains("London, GB"));

        let Step::Print(text) = session.step(Command::parse("/1")) else {
            panic!("expected output");
        };
        assert_eq!(session.selected, Some(0));
        assert!(text.contains("Forecast for Sat, 17 Oct"));

        // The bundle only has two days.
        assert_eq!(
            session.step(Command::parse("/3")),
            Step::Print("No forecast for day 3.".to_string())
        );
        assert_eq!(session.selected, Some(0));

        session.step(Command::parse("/0"));
        assert_eq!(session.selected, None);
    }

    #[test]
    fn failed_search_keeps_previous_result() {
        let mut session = Session::new(TemperatureUnit::Celsius);
        session.receive(Ok(bundle()));
        session.step(Command::parse("/2"));

        let text = session.receive(Err(FetchError::ForecastFailed));
        assert_eq!(text, "Error: Failed to fetch forecast data");
        assert!(session.bundle.is_some());
        assert_eq!(session.selected, None);
    }
}

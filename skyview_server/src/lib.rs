use std::fs::File;
use std::path::Path;

use ctrlc::set_handler;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa_axum::router::OpenApiRouter;

pub mod client;
pub mod forecast;
pub mod formatter;
pub mod models;
pub mod routes;
pub mod utils;

use models::{
    config::{ConfigError, SkyviewConfig},
    state::SkyviewState,
};

/// Environment variable holding the path to the JSON config file.
pub const CONFIG_PATH_VAR: &str = "SKYVIEW_CONFIG_PATH";

pub fn init() -> Result<SkyviewState, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    // All configuration comes from environment variables and a required
    // config file.
    let config = load_config()?;
    let state = SkyviewState::new(config)?;
    info!(
        "weather provider configured at {}",
        state.weather_client.base_url()
    );
    Ok(state)
}

/// Read the config file pointed to by `SKYVIEW_CONFIG_PATH`.
pub fn load_config() -> Result<SkyviewConfig, ConfigError> {
    let config_path =
        dotenvy::var(CONFIG_PATH_VAR).map_err(|_| ConfigError::MissingVar(CONFIG_PATH_VAR))?;
    read_config(config_path)
}

pub fn read_config(path: impl AsRef<Path>) -> Result<SkyviewConfig, ConfigError> {
    let path = path.as_ref();
    let config_file = File::open(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(config_file).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Every public route, nested under `/api`.
pub fn api_router(state: SkyviewState) -> OpenApiRouter {
    let routes = routes::weather::router(state).merge(routes::status::router());
    OpenApiRouter::new().nest("/api", routes)
}

use axum::extract::FromRef;

use crate::{
    client::WeatherClient,
    models::config::{ConfigError, ServerConfig, SkyviewConfig},
};

#[derive(Clone)]
pub struct SkyviewState {
    pub server_config: ServerConfig,
    pub weather_client: WeatherClient,
}

impl SkyviewState {
    pub fn new(config: SkyviewConfig) -> Result<Self, ConfigError> {
        let SkyviewConfig { server, provider } = config;
        let weather_client = WeatherClient::new(provider, &server.user_agent)?;
        Ok(Self {
            server_config: server,
            weather_client,
        })
    }
}

impl FromRef<SkyviewState> for WeatherClient {
    fn from_ref(state: &SkyviewState) -> WeatherClient {
        state.weather_client.clone()
    }
}

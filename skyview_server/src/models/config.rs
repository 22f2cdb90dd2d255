use serde::Deserialize;
use std::default;
use std::fmt;

use crate::utils;

#[derive(Clone, Debug, Deserialize)]
pub struct UserAgent(String);

impl default::Default for UserAgent {
    fn default() -> Self {
        Self("https://github.com/skyview-weather/skyview".to_string())
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserAgent {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Provider credential. Never printed.
#[derive(Clone, Default, Deserialize)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_missing(&self) -> bool {
        self.0.trim().is_empty() || envsubst::is_templated(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "utils::default_server_binding_addr")]
    pub bind_addr: String,
    #[serde(default, deserialize_with = "utils::deserialize_with_envsubst")]
    pub user_agent: UserAgent,
}

impl default::Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: utils::default_server_binding_addr(),
            user_agent: UserAgent::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProviderConfig {
    #[serde(
        default = "utils::default_provider_base_url",
        deserialize_with = "utils::deserialize_with_envsubst"
    )]
    pub base_url: String,
    #[serde(default, deserialize_with = "utils::deserialize_with_envsubst")]
    pub api_key: ApiKey,
    #[serde(default = "utils::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<ApiKey>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: utils::default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkyviewConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_missing_fields() {
        let config: SkyviewConfig =
            serde_json::from_str(r#"{"provider": {"api_key": "abc123"}}"#).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.provider.base_url, "https://api.openweathermap.org");
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.provider.api_key.as_str(), "abc123");
        assert!(!config.provider.api_key.is_missing());
    }

    #[test]
    fn api_key_missing_when_blank_or_unresolved() {
        assert!(ApiKey::default().is_missing());
        assert!(ApiKey::from("   ").is_missing());
        assert!(ApiKey::from("${OPENWEATHERMAP_API_KEY}").is_missing());
    }

    #[test]
    fn api_key_is_redacted() {
        let key = ApiKey::from("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}

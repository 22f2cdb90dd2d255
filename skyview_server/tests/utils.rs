#![allow(dead_code)]

use reqwest::Response;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use skyview_server::models::{
    config::{ProviderConfig, ServerConfig, SkyviewConfig},
    state::SkyviewState,
};

pub async fn assert_ok_response(response: Response) -> Result<Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let body = response.text().await.map_err(|err| format!("{err:?}"))?;
        Err(body)
    }
}

/// Serve the API on an ephemeral port, talking to the given provider URL.
/// Returns the base URL of the `/api` routes.
pub async fn spawn_server(provider_url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let config = SkyviewConfig {
        server: ServerConfig::default(),
        provider: ProviderConfig::new(provider_url, "test-key"),
    };
    let state = SkyviewState::new(config)?;
    let (router, _) = skyview_server::api_router(state).split_for_parts();
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let _ = tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://{addr}/api"))
}

pub fn current_weather_body() -> Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [
            {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}
        ],
        "base": "stations",
        "main": {
            "temp": 14.2,
            "feels_like": 13.1,
            "temp_min": 12.9,
            "temp_max": 15.4,
            "pressure": 1012,
            "humidity": 71
        },
        "visibility": 10000,
        "wind": {"speed": 4.6, "deg": 230},
        "clouds": {"all": 75},
        "dt": 1792159509,
        "sys": {"country": "GB", "sunrise": 1792131600, "sunset": 1792170000},
        "timezone": 3600,
        "id": 2643743,
        "name": "London",
        "cod": 200
    })
}

pub fn geocode_body() -> Value {
    json!([
        {
            "name": "London",
            "local_names": {"en": "London"},
            "lat": 51.5073219,
            "lon": -0.1276474,
            "country": "GB",
            "state": "England"
        }
    ])
}

/// Five days of 3-hour samples starting at `start`.
pub fn forecast_body(start: i64) -> Value {
    let list: Vec<Value> = (0..40)
        .map(|i| {
            json!({
                "dt": start + i * 3 * 3600,
                "main": {
                    "temp": 10.0 + i as f64 * 0.1,
                    "feels_like": 9.0,
                    "temp_min": 8.0,
                    "temp_max": 12.0,
                    "humidity": 80
                },
                "weather": [
                    {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
                ],
                "wind": {"speed": 5.1, "deg": 180},
                "dt_txt": "ignored"
            })
        })
        .collect();
    json!({"cod": "200", "cnt": 40, "list": list})
}

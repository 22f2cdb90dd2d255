/// Failures talking to the upstream weather provider.
#[derive(Debug, thiserror::Error)]
pub enum WeatherClientError {
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("failed to reach weather provider: {0}")]
    ApiConnection(#[source] reqwest::Error),
    #[error("weather provider responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse weather provider response: {0}")]
    ResponseJson(#[source] serde_json::Error),
}

/// Longest upstream error body echoed back to callers.
pub const MAX_ERROR_BODY_LEN: usize = 200;

pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

use axum::{extract::Query, response::Json};
use skyview::{StatusResponse, Units};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::models::weather::StatusParams;

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(status))
}

/// Check that the weather routes are reachable.
///
/// Echoes the given city and units back without validating them or
/// contacting the weather provider.
#[utoipa::path(
    get,
    path = "/status",
    params(StatusParams),
    responses(
        (status = 200, description = "Weather routes are up", body = StatusResponse)
    )
)]
#[axum::debug_handler]
pub async fn status(Query(params): Query<StatusParams>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Weather route is working".to_string(),
        city: params.city,
        units: params
            .units
            .unwrap_or_else(|| Units::default().to_string()),
    })
}

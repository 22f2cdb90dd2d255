use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Json,
};
use chrono::Local;
use skyview::{ConvertResponse, DailyForecast, Envelope, GeocodeResult, WeatherReport, units};
use tracing::{debug, info};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    client::WeatherClient,
    forecast, formatter,
    models::{
        state::SkyviewState,
        weather::{
            CitySearchParams, ForecastQuery, ForecastQueryParams, RawConvertRequest, WeatherQuery,
            WeatherQueryParams,
        },
    },
    utils::{ApiError, FieldErrors},
};

pub fn router(state: SkyviewState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_weather_by_city))
        .routes(routes!(search_cities))
        .routes(routes!(convert_temperature))
        .routes(routes!(get_forecast_by_coordinates))
        .with_state(state)
}

fn malformed(field: &'static str, message: String) -> ApiError {
    let mut errors = FieldErrors::default();
    errors.push(field, message);
    ApiError::Validation(errors)
}

fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| malformed("query", rejection.body_text()))
}

/// Get current weather and location details for a city.
#[utoipa::path(
    get,
    path = "/weather",
    params(WeatherQueryParams),
    responses(
        (status = 200, description = "Weather data retrieved successfully", body = Envelope<WeatherReport>),
        (status = 404, description = "City not found"),
        (status = 422, description = "Missing or malformed query parameters"),
        (status = 500, description = "Weather provider failed")
    )
)]
#[axum::debug_handler(state = SkyviewState)]
pub async fn get_weather_by_city(
    State(client): State<WeatherClient>,
    params: Result<Query<WeatherQueryParams>, QueryRejection>,
) -> Result<Json<Envelope<WeatherReport>>, ApiError> {
    let WeatherQuery { city, units } = query_params(params)?.validate()?;
    debug!("getting current weather for {city:?} in {units}");
    let current = client.fetch_current(&city, units).await?;
    let report = formatter::format_report(current, &Local::now());
    Ok(Json(Envelope::success(
        report,
        "Weather data retrieved successfully",
    )))
}

/// Find the best geocoding match for a city name.
#[utoipa::path(
    get,
    path = "/weather/search",
    params(CitySearchParams),
    responses(
        (status = 200, description = "City found", body = Envelope<Vec<GeocodeResult>>),
        (status = 404, description = "No city matched the query"),
        (status = 422, description = "Missing or malformed query parameters"),
        (status = 500, description = "Weather provider failed")
    )
)]
#[axum::debug_handler(state = SkyviewState)]
pub async fn search_cities(
    State(client): State<WeatherClient>,
    params: Result<Query<CitySearchParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<GeocodeResult>>>, ApiError> {
    let query = query_params(params)?.validate()?;
    debug!("geocoding {query:?}");
    let result = client
        .search_city(&query)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No cities found matching: {query}")))?;
    Ok(Json(Envelope::success(
        vec![formatter::format_geocode(result)],
        "City found",
    )))
}

/// Convert a temperature between Celsius and Fahrenheit.
///
/// Converted values are rounded to two decimals. Converting a value into
/// the scale it's already in returns it untouched.
#[utoipa::path(
    post,
    path = "/weather/convert",
    request_body = RawConvertRequest,
    responses(
        (status = 200, description = "Temperature converted successfully", body = Envelope<ConvertResponse>),
        (status = 422, description = "Missing or malformed body fields")
    )
)]
#[axum::debug_handler]
pub async fn convert_temperature(
    payload: Result<Json<RawConvertRequest>, JsonRejection>,
) -> Result<Json<Envelope<ConvertResponse>>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| malformed("body", rejection.body_text()))?;
    let request = payload.validate()?;
    let response = ConvertResponse {
        value: units::convert(request.value, request.from, request.to),
        original: request.value,
        from: request.from,
        to: request.to,
    };
    Ok(Json(Envelope::success(
        response,
        "Temperature converted successfully",
    )))
}

/// Get up to three days of forecast for a coordinate, one entry per day
/// picked as the sample closest to noon.
#[utoipa::path(
    get,
    path = "/weather/forecast",
    params(ForecastQueryParams),
    responses(
        (status = 200, description = "Forecast data retrieved successfully", body = Envelope<Vec<DailyForecast>>),
        (status = 422, description = "Missing or malformed query parameters"),
        (status = 500, description = "Weather provider failed")
    )
)]
#[axum::debug_handler(state = SkyviewState)]
pub async fn get_forecast_by_coordinates(
    State(client): State<WeatherClient>,
    params: Result<Query<ForecastQueryParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<DailyForecast>>>, ApiError> {
    let ForecastQuery { lat, lon, units } = query_params(params)?.validate()?;
    debug!("getting forecast for ({lat}, {lon}) in {units}");
    let feed = client.fetch_forecast(lat, lon, units).await?;
    let now = Local::now();
    let samples = feed.list.len();
    let forecasts: Vec<DailyForecast> = forecast::reduce_daily(feed.list, &now)
        .into_iter()
        .map(|day| formatter::format_daily(day, &Local))
        .collect();
    info!("reduced {samples} forecast samples to {} days", forecasts.len());
    Ok(Json(Envelope::success(
        forecasts,
        "Forecast data retrieved successfully",
    )))
}

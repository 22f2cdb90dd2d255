use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Skyview Weather Server",
    description = "Current weather, city search, temperature conversion and daily forecasts backed by OpenWeatherMap"
))]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the server state and extract the server binding address.
    let state = skyview_server::init()?;
    let binding_addr = state.server_config.bind_addr.clone();

    let openapi_router =
        OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(skyview_server::api_router(state));
    let (router, api) = openapi_router.split_for_parts();
    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        );

    let listener = TcpListener::bind(&binding_addr).await?;
    info!("listening on {binding_addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

use crate::handlers::{
    forecast::{get_forecast, get_forecast_chart, get_forecast_summary},
    health::health_check,
    tickers::get_tickers,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Forecast routes
        .route("/api/v1/forecast/:ticker", get(get_forecast))
        .route("/api/v1/forecast/:ticker/summary", get(get_forecast_summary))
        .route("/api/v1/forecast/:ticker/chart", get(get_forecast_chart))
        // Ticker routes
        .route("/api/v1/tickers", get(get_tickers))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Prometheus installs a process-global recorder: one instrumented router per process
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

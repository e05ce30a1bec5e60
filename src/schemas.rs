use std::sync::Arc;
use std::time::Duration;

use common::{
    ChartSeries, ForecastResult, ForecastSummary, HistoricalPoint, PredictedPoint, PriceDirection,
    TickerBasePrice,
};
use compute::generator::SeriesGenerator;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

pub use common::ApiResponse;

/// Horizon used when a request does not name one
pub const DEFAULT_PREDICTION_DAYS: u32 = 14;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shared, immutable generator
    pub generator: Arc<SeriesGenerator>,
    /// Artificial delay added before a forecast is returned
    pub simulated_latency: Duration,
    /// Upper bound on request processing time
    pub request_timeout: Duration,
}

/// Query parameters for forecast endpoints
#[derive(Debug, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Number of days to predict (1-30, default 14)
    #[validate(range(min = 1, max = 30))]
    pub days: Option<u32>,
    /// Seed for a reproducible forecast
    pub seed: Option<u64>,
}

impl ForecastQuery {
    pub fn prediction_days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_PREDICTION_DAYS)
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::get_forecast,
        crate::handlers::forecast::get_forecast_summary,
        crate::handlers::forecast::get_forecast_chart,
        crate::handlers::tickers::get_tickers,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            ForecastResult,
            HistoricalPoint,
            PredictedPoint,
            ForecastSummary,
            PriceDirection,
            ChartSeries,
            TickerBasePrice,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Synthetic price history and forecast endpoints"),
        (name = "tickers", description = "Known ticker endpoints"),
    ),
    info(
        title = "Stockcast API",
        description = "Synthetic stock price history and random-walk forecasts with confidence bands",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

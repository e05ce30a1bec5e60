use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::Utc;
use common::{ChartSeries, ForecastResult, ForecastSummary};
use compute::{
    chart::build_chart_series,
    error::ComputeError,
    random::SeededRandom,
    summary::summarize,
};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, ErrorResponse, ForecastQuery};

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Get synthetic history and forecast for a ticker
#[utoipa::path(
    get,
    path = "/api/v1/forecast/{ticker}",
    tag = "forecast",
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol, case-insensitive"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Forecast generated successfully", body = ApiResponse<ForecastResult>),
        (status = 400, description = "Invalid ticker or horizon", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    Path(ticker): Path<String>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ForecastResult>>), HandlerError> {
    trace!("Entering get_forecast function");

    let forecast = run_forecast(&state, &ticker, &query).await?;

    let response = ApiResponse {
        data: forecast,
        message: "Forecast generated successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Get the headline figures of a forecast for a ticker
#[utoipa::path(
    get,
    path = "/api/v1/forecast/{ticker}/summary",
    tag = "forecast",
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol, case-insensitive"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Forecast summary generated successfully", body = ApiResponse<ForecastSummary>),
        (status = 400, description = "Invalid ticker or horizon", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast_summary(
    Path(ticker): Path<String>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ForecastSummary>>), HandlerError> {
    trace!("Entering get_forecast_summary function");

    let forecast = run_forecast(&state, &ticker, &query).await?;
    let summary = summarize(&forecast).map_err(compute_error_response)?;

    info!(
        "{} moves {}% over {} days",
        summary.ticker,
        summary.change_percent,
        forecast.prediction_days()
    );

    let response = ApiResponse {
        data: summary,
        message: "Forecast summary generated successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Get a forecast laid out as chart series on a shared date axis
#[utoipa::path(
    get,
    path = "/api/v1/forecast/{ticker}/chart",
    tag = "forecast",
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol, case-insensitive"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Chart series generated successfully", body = ApiResponse<ChartSeries>),
        (status = 400, description = "Invalid ticker or horizon", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast_chart(
    Path(ticker): Path<String>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ChartSeries>>), HandlerError> {
    trace!("Entering get_forecast_chart function");

    let forecast = run_forecast(&state, &ticker, &query).await?;
    let series = build_chart_series(&forecast);
    debug!("Built chart series with {} labels", series.len());

    let response = ApiResponse {
        data: series,
        message: "Chart series generated successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Generates the forecast, then waits out the configured simulated latency.
async fn run_forecast(
    state: &AppState,
    ticker: &str,
    query: &ForecastQuery,
) -> Result<ForecastResult, HandlerError> {
    let days = query.prediction_days();
    let today = Utc::now().date_naive();
    debug!("Generating forecast for {} - days: {}, seed: {:?}", ticker, days, query.seed);

    let forecast = {
        let mut rng = match query.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        state
            .generator
            .generate_forecast(ticker, days, today, &mut rng)
            .map_err(compute_error_response)?
    };

    if !state.simulated_latency.is_zero() {
        debug!("Simulating {:?} of model latency", state.simulated_latency);
        tokio::time::sleep(state.simulated_latency).await;
    }

    info!(
        "Generated forecast for {}: {} historical, {} predicted points",
        forecast.ticker,
        forecast.historical_data.len(),
        forecast.predicted_data.len()
    );
    Ok(forecast)
}

fn compute_error_response(err: ComputeError) -> HandlerError {
    match err {
        ComputeError::InvalidArgument(message) => {
            warn!("Rejected forecast request: {}", message);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(message, "INVALID_ARGUMENT")),
            )
        }
        ComputeError::Configuration(message) => {
            error!("Generator configuration error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "Forecast generator is misconfigured",
                    "CONFIGURATION_ERROR",
                )),
            )
        }
    }
}

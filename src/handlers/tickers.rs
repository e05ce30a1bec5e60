use axum::{extract::State, http::StatusCode, response::Json};
use common::TickerBasePrice;
use tracing::{info, instrument};

use crate::schemas::{ApiResponse, AppState};

/// List tickers with a dedicated base price
///
/// Any other ticker is accepted by the forecast endpoints and starts from the
/// default base price.
#[utoipa::path(
    get,
    path = "/api/v1/tickers",
    tag = "tickers",
    responses(
        (status = 200, description = "Known tickers retrieved successfully", body = ApiResponse<Vec<TickerBasePrice>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_tickers(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<TickerBasePrice>>>) {
    let tickers: Vec<TickerBasePrice> = state
        .generator
        .config()
        .known_tickers()
        .into_iter()
        .map(|(ticker, base_price)| TickerBasePrice { ticker, base_price })
        .collect();

    info!("Successfully retrieved {} known tickers", tickers.len());

    let response = ApiResponse {
        data: tickers,
        message: "Known tickers retrieved successfully".to_string(),
        success: true,
    };
    (StatusCode::OK, Json(response))
}

//! Common transport-layer types shared between the generator and its consumers.
//! The HTTP handlers, the CLI and any presentation layer deserialize these
//! shapes without duplicating them.

mod chart;
mod forecast;
mod summary;

pub use chart::ChartSeries;
pub use forecast::{ForecastResult, HistoricalPoint, PredictedPoint};
pub use summary::{ForecastSummary, PriceDirection};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Tickers =====================

/// A known ticker and the base price its synthetic history starts from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerBasePrice {
    pub ticker: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub base_price: Decimal,
}

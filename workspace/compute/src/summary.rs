use common::{ForecastResult, ForecastSummary, PriceDirection};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{ComputeError, Result};

/// Computes the headline figures of a forecast.
///
/// The end price is the last predicted price; the percentage change is taken
/// against the latest historical price and rounded to 2 decimal places.
pub fn summarize(forecast: &ForecastResult) -> Result<ForecastSummary> {
    let predicted_end_price = forecast.predicted_end_price().ok_or_else(|| {
        ComputeError::invalid_argument(format!(
            "forecast for {} has no predicted points",
            forecast.ticker
        ))
    })?;
    let latest_price = forecast.latest_price;
    if latest_price <= Decimal::ZERO {
        return Err(ComputeError::invalid_argument(format!(
            "latest price for {} must be positive, got {}",
            forecast.ticker, latest_price
        )));
    }

    let change = predicted_end_price - latest_price;
    let change_percent = (change / latest_price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let direction = PriceDirection::from_change(change);

    debug!(
        "{}: {} -> {} ({}%)",
        forecast.ticker, latest_price, predicted_end_price, change_percent
    );

    Ok(ForecastSummary {
        ticker: forecast.ticker.clone(),
        latest_price,
        predicted_end_price,
        change,
        change_percent,
        direction,
    })
}

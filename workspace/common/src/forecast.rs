use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single synthetic past closing price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoricalPoint {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Price rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl HistoricalPoint {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// A synthetic future price together with its confidence band.
///
/// `lower_bound <= price <= upper_bound` holds for every point produced by the
/// generator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictedPoint {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Predicted price rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Lower edge of the confidence band
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub lower_bound: Decimal,
    /// Upper edge of the confidence band
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub upper_bound: Decimal,
}

impl PredictedPoint {
    /// Distance from the predicted price to the upper edge of the band.
    pub fn half_width(&self) -> Decimal {
        self.upper_bound - self.price
    }

    pub fn contains_price(&self) -> bool {
        self.lower_bound <= self.price && self.price <= self.upper_bound
    }
}

/// Synthetic history plus forecast for one ticker.
///
/// Regenerated on every request; it has no persisted identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub ticker: String,
    /// Price of the last historical point
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub latest_price: Decimal,
    /// Ascending, consecutive days ending the day before generation
    pub historical_data: Vec<HistoricalPoint>,
    /// Ascending, consecutive days starting the day after generation
    pub predicted_data: Vec<PredictedPoint>,
}

impl ForecastResult {
    /// Price of the last predicted point, if any prediction was made.
    pub fn predicted_end_price(&self) -> Option<Decimal> {
        self.predicted_data.last().map(|p| p.price)
    }

    pub fn prediction_days(&self) -> usize {
        self.predicted_data.len()
    }
}

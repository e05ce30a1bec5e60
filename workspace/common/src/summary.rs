use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Direction of the predicted move relative to the latest known price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Up,
    Down,
}

impl PriceDirection {
    /// A zero change counts as `Up`.
    pub fn from_change(change: Decimal) -> Self {
        if change >= Decimal::ZERO {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        }
    }
}

/// Headline figures of a forecast: latest price, end-of-horizon price and the
/// change between them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub ticker: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub latest_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub predicted_end_price: Decimal,
    /// `predicted_end_price - latest_price`
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub change: Decimal,
    /// Change as a percentage of the latest price, 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub change_percent: Decimal,
    pub direction: PriceDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_change() {
        assert_eq!(PriceDirection::from_change(Decimal::new(150, 2)), PriceDirection::Up);
        assert_eq!(PriceDirection::from_change(Decimal::ZERO), PriceDirection::Up);
        assert_eq!(PriceDirection::from_change(Decimal::new(-1, 2)), PriceDirection::Down);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_value(PriceDirection::Down).unwrap(), "down");
    }
}

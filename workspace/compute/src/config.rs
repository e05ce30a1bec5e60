use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ComputeError, Result};

/// Number of past days every forecast carries.
pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 90;
/// Longest horizon a caller may request.
pub const DEFAULT_MAX_PREDICTION_DAYS: u32 = 30;

/// Tunables of the synthetic series generator.
///
/// Deserializable so it can be nested under the `generator` section of the
/// application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Length of the synthetic history
    pub history_window_days: u32,
    /// Floor applied to every emitted price
    pub min_price: f64,
    /// Upper bound for the requested horizon (lower bound is always 1)
    pub max_prediction_days: u32,
    /// Base price used for tickers missing from `base_ticker_prices`
    pub default_base_price: f64,
    /// Known tickers (upper-case) and the price their history starts from
    pub base_ticker_prices: BTreeMap<String, f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let base_ticker_prices = BTreeMap::from([
            ("AAPL".to_string(), 180.0),
            ("TSLA".to_string(), 250.0),
            ("GOOG".to_string(), 145.0),
        ]);

        Self {
            history_window_days: DEFAULT_HISTORY_WINDOW_DAYS,
            min_price: 50.0,
            max_prediction_days: DEFAULT_MAX_PREDICTION_DAYS,
            default_base_price: 150.0,
            base_ticker_prices,
        }
    }
}

impl GeneratorConfig {
    /// Base price for a ticker. Lookup is case-insensitive; unknown tickers
    /// fall back to `default_base_price`.
    pub fn base_price_for(&self, ticker: &str) -> f64 {
        self.base_ticker_prices
            .get(&ticker.trim().to_uppercase())
            .copied()
            .unwrap_or(self.default_base_price)
    }

    /// Rewrites the ticker table with trimmed, upper-case symbols.
    ///
    /// Configuration sources may hand keys over in any case.
    pub fn normalize_tickers(&mut self) {
        self.base_ticker_prices = std::mem::take(&mut self.base_ticker_prices)
            .into_iter()
            .map(|(ticker, price)| (ticker.trim().to_uppercase(), price))
            .collect();
    }

    /// Known tickers with their base prices, rounded to cents, in symbol order.
    pub fn known_tickers(&self) -> Vec<(String, Decimal)> {
        self.base_ticker_prices
            .iter()
            .map(|(ticker, price)| (ticker.clone(), crate::generator::round_price(*price)))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_window_days == 0 {
            return Err(ComputeError::Configuration(
                "history_window_days must be at least 1".to_string(),
            ));
        }
        if !(self.min_price.is_finite() && self.min_price > 0.0) {
            return Err(ComputeError::Configuration(format!(
                "min_price must be a positive number, got {}",
                self.min_price
            )));
        }
        if self.max_prediction_days == 0 {
            return Err(ComputeError::Configuration(
                "max_prediction_days must be at least 1".to_string(),
            ));
        }
        if !(self.default_base_price.is_finite() && self.default_base_price > 0.0) {
            return Err(ComputeError::Configuration(format!(
                "default_base_price must be a positive number, got {}",
                self.default_base_price
            )));
        }
        for (ticker, price) in &self.base_ticker_prices {
            if ticker.trim().is_empty() {
                return Err(ComputeError::Configuration(
                    "base_ticker_prices contains a blank ticker".to_string(),
                ));
            }
            if *ticker != ticker.trim().to_uppercase() {
                return Err(ComputeError::Configuration(format!(
                    "ticker '{}' in base_ticker_prices is not normalized",
                    ticker
                )));
            }
            if !(price.is_finite() && *price > 0.0) {
                return Err(ComputeError::Configuration(format!(
                    "base price for {} must be a positive number, got {}",
                    ticker, price
                )));
            }
        }
        Ok(())
    }
}

use chrono::{Days, NaiveDate};
use common::{ForecastResult, HistoricalPoint, PredictedPoint};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, instrument};

use crate::config::GeneratorConfig;
use crate::error::{ComputeError, Result};
use crate::random::RandomSource;

/// Linear upward drift of the synthetic history, per day.
pub const HISTORICAL_DAILY_DRIFT: f64 = 0.15;
/// Half-range of the symmetric daily noise added to the history.
pub const HISTORICAL_NOISE: f64 = 1.0;
/// Smallest per-step trend of the predicted walk, in percent.
pub const PREDICTED_TREND_FLOOR: f64 = 0.1;
/// Width of the random part of the per-step trend, in percent.
pub const PREDICTED_TREND_SPAN: f64 = 0.5;
/// Half-range of the symmetric per-step noise of the predicted walk, in percent.
pub const PREDICTED_NOISE: f64 = 0.75;
/// Relative half-width of the confidence band before the first step.
pub const CONFIDENCE_BASE: f64 = 0.005;
/// Growth of the relative half-width per day ahead.
pub const CONFIDENCE_STEP: f64 = 0.001;

/// Relative half-width of the confidence band `days_ahead` days out.
pub fn confidence_multiplier(days_ahead: u32) -> f64 {
    CONFIDENCE_BASE + f64::from(days_ahead) * CONFIDENCE_STEP
}

/// Rounds a price to cents, half away from zero.
pub fn round_price(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Produces synthetic price histories and random-walk forecasts.
///
/// Holds only configuration; every call to [`SeriesGenerator::generate_forecast`]
/// is independent and all randomness comes from the supplied source.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }
}

impl SeriesGenerator {
    /// Creates a generator after validating the configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Checks the caller's inputs and returns the normalized ticker.
    ///
    /// The ticker is trimmed and upper-cased; the horizon must lie in
    /// `1..=max_prediction_days`.
    pub fn validate_request(&self, ticker: &str, prediction_days: u32) -> Result<String> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ComputeError::invalid_argument("ticker must not be empty"));
        }
        if prediction_days == 0 || prediction_days > self.config.max_prediction_days {
            return Err(ComputeError::invalid_argument(format!(
                "prediction_days must be between 1 and {}, got {}",
                self.config.max_prediction_days, prediction_days
            )));
        }
        Ok(ticker.to_uppercase())
    }

    /// Generates the synthetic history and forecast for `ticker`.
    ///
    /// History covers the `history_window_days` days before `today`; the
    /// forecast covers `today + 1 ..= today + prediction_days`. Fails with
    /// [`ComputeError::InvalidArgument`] before drawing anything if the inputs
    /// are out of range.
    #[instrument(skip(self, rng))]
    pub fn generate_forecast<R>(
        &self,
        ticker: &str,
        prediction_days: u32,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<ForecastResult>
    where
        R: RandomSource + ?Sized,
    {
        let ticker = self.validate_request(ticker, prediction_days)?;
        let base_price = self.config.base_price_for(&ticker);
        debug!("Base price for {} is {}", ticker, base_price);

        let historical_data = self.historical_walk(base_price, today, rng)?;
        // History is never empty: the configuration guarantees a window of at least one day.
        let latest_price = historical_data
            .last()
            .map(|p| p.price)
            .ok_or_else(|| ComputeError::Configuration("history window is empty".to_string()))?;

        let predicted_data = self.predicted_walk(latest_price, prediction_days, today, rng)?;

        info!(
            "Prediction complete for {}. Predicted {} days into the future.",
            ticker, prediction_days
        );

        Ok(ForecastResult {
            ticker,
            latest_price,
            historical_data,
            predicted_data,
        })
    }

    /// One point per day with a linear drift plus bounded noise, ending the day
    /// before `today`.
    fn historical_walk<R>(
        &self,
        base_price: f64,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<HistoricalPoint>>
    where
        R: RandomSource + ?Sized,
    {
        let window = self.config.history_window_days;
        let start = today
            .checked_sub_days(Days::new(u64::from(window)))
            .ok_or_else(|| date_out_of_range(today))?;

        let mut points = Vec::with_capacity(window as usize);
        for day_index in 0..window {
            let date = start
                .checked_add_days(Days::new(u64::from(day_index)))
                .ok_or_else(|| date_out_of_range(today))?;

            let noise = rng.uniform(-HISTORICAL_NOISE, HISTORICAL_NOISE);
            let price = base_price + f64::from(day_index) * HISTORICAL_DAILY_DRIFT + noise;

            points.push(HistoricalPoint::new(
                date,
                round_price(price.max(self.config.min_price)),
            ));
        }

        Ok(points)
    }

    /// Multiplicative random walk from the latest price with a widening band.
    ///
    /// The unrounded price carries from step to step; only emitted values are
    /// rounded.
    fn predicted_walk<R>(
        &self,
        latest_price: Decimal,
        prediction_days: u32,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<PredictedPoint>>
    where
        R: RandomSource + ?Sized,
    {
        let min_price = self.config.min_price;
        let mut current = latest_price.to_f64().unwrap_or(min_price);

        let mut points = Vec::with_capacity(prediction_days as usize);
        for days_ahead in 1..=prediction_days {
            let trend = rng.uniform(0.0, PREDICTED_TREND_SPAN) + PREDICTED_TREND_FLOOR;
            let noise = rng.uniform(-PREDICTED_NOISE, PREDICTED_NOISE);

            current *= 1.0 + (trend + noise) / 100.0;
            if current < min_price {
                current = min_price;
            }

            let multiplier = confidence_multiplier(days_ahead);
            let date = today
                .checked_add_days(Days::new(u64::from(days_ahead)))
                .ok_or_else(|| date_out_of_range(today))?;

            points.push(PredictedPoint {
                date,
                price: round_price(current),
                lower_bound: round_price(current * (1.0 - multiplier)),
                upper_bound: round_price(current * (1.0 + multiplier)),
            });
        }

        Ok(points)
    }
}

fn date_out_of_range(today: NaiveDate) -> ComputeError {
    ComputeError::invalid_argument(format!(
        "generation date {} leaves no room for the requested series",
        today
    ))
}

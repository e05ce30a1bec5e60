pub mod chart;
pub mod config;
pub mod error;
pub mod generator;
pub mod random;
pub mod summary;

use chrono::{NaiveDate, Utc};
use common::ForecastResult;

use config::GeneratorConfig;
use generator::SeriesGenerator;
use random::SeededRandom;

/// Returns a default pre-configured generator that will be used most of the time.
///
/// It uses the built-in ticker table, a 90 day history, a 50.0 price floor and
/// horizons of up to 30 days.
pub fn default_generator() -> SeriesGenerator {
    SeriesGenerator::default()
}

/// Generates a forecast with the default generator, today's UTC date and an
/// entropy-seeded random source.
///
/// Every call returns a different result for the same inputs. Use
/// [`SeriesGenerator::generate_forecast`] with a seeded or fixed source when
/// reproducible output is needed.
pub fn generate_forecast(ticker: &str, prediction_days: u32) -> error::Result<ForecastResult> {
    generate_forecast_with(&GeneratorConfig::default(), ticker, prediction_days, None)
}

/// Generates a forecast with the given configuration.
///
/// `seed` selects a reproducible random source; `None` draws from OS entropy.
pub fn generate_forecast_with(
    config: &GeneratorConfig,
    ticker: &str,
    prediction_days: u32,
    seed: Option<u64>,
) -> error::Result<ForecastResult> {
    let generator = SeriesGenerator::new(config.clone())?;
    let mut rng = match seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    generator.generate_forecast(ticker, prediction_days, today(), &mut rng)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

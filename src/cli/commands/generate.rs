use anyhow::{Context, Result};
use compute::generate_forecast_with;
use compute::summary::summarize;
use tracing::{debug, info, trace};

use crate::config::load_config;

/// Arguments of the `generate` command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub ticker: String,
    pub days: u32,
    pub seed: Option<u64>,
    pub summary: bool,
}

pub fn generate(options: GenerateOptions) -> Result<()> {
    trace!("Entering generate function");
    let app_config = load_config()?;

    println!("{}", render(&app_config.generator, &options)?);
    Ok(())
}

/// Generates the forecast described by `options` and renders it as pretty JSON.
pub fn render(config: &compute::config::GeneratorConfig, options: &GenerateOptions) -> Result<String> {
    debug!(
        "Generating forecast for {} - days: {}, seed: {:?}",
        options.ticker, options.days, options.seed
    );

    let forecast = generate_forecast_with(config, &options.ticker, options.days, options.seed)
        .with_context(|| format!("Failed to generate forecast for '{}'", options.ticker))?;
    info!(
        "Generated {} predicted days for {}",
        forecast.prediction_days(),
        forecast.ticker
    );

    let json = if options.summary {
        let summary = summarize(&forecast).context("Failed to summarize forecast")?;
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string_pretty(&forecast)?
    };
    Ok(json)
}

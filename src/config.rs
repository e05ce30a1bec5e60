use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use compute::config::GeneratorConfig;
use compute::generator::SeriesGenerator;
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::schemas::AppState;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_FILE_ENV: &str = "STOCKCAST_CONFIG";
/// Prefix of configuration environment variables, e.g. `STOCKCAST__SERVER__BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "STOCKCAST";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, IP:PORT
    pub bind_address: String,
    /// Artificial delay added to every forecast response
    pub simulated_latency_ms: u64,
    /// Upper bound on request processing time
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            simulated_latency_ms: 0,
            request_timeout_secs: 30,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.server.simulated_latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}

/// Load configuration from `.env`, the optional config file and the environment.
///
/// Later sources override earlier ones: built-in defaults, then
/// `stockcast.{toml,yaml,json}` (or the file named by `STOCKCAST_CONFIG`), then
/// `STOCKCAST__*` variables.
pub fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let file = match std::env::var(CONFIG_FILE_ENV) {
        Ok(path) => {
            tracing::info!("Loading configuration file: {}", path);
            File::with_name(&path).required(true)
        }
        Err(_) => File::with_name("stockcast").required(false),
    };

    let builder = ::config::Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    build_config(builder)
}

/// Deserialize and validate the merged sources.
pub fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig> {
    let mut app_config: AppConfig = builder
        .build()
        .context("Failed to read configuration sources")?
        .try_deserialize()
        .context("Failed to parse configuration")?;

    app_config.generator.normalize_tickers();
    app_config
        .generator
        .validate()
        .context("Invalid generator configuration")?;

    Ok(app_config)
}

/// Initialize application state from a loaded configuration
pub fn initialize_app_state(app_config: &AppConfig) -> Result<AppState> {
    let generator = SeriesGenerator::new(app_config.generator.clone())
        .context("Failed to build series generator")?;

    tracing::debug!(
        "Series generator ready: {} day history, {} known tickers",
        generator.config().history_window_days,
        generator.config().base_ticker_prices.len()
    );

    Ok(AppState {
        generator: Arc::new(generator),
        simulated_latency: app_config.simulated_latency(),
        request_timeout: app_config.request_timeout(),
    })
}

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{generate, serve, GenerateOptions};

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Synthetic stock price history and forecast generator with a JSON API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides `server.bind_address` from the configuration.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Artificial delay in milliseconds added to every forecast response
        ///
        /// Overrides `server.simulated_latency_ms` from the configuration.
        #[arg(long)]
        simulated_latency_ms: Option<u64>,
    },
    /// Generate a forecast and print it as JSON
    ///
    /// Examples:
    ///   stockcast generate --ticker TSLA --days 14
    ///   stockcast generate --ticker AAPL --days 30 --seed 42 --summary
    Generate {
        /// Stock ticker symbol (case-insensitive)
        #[arg(short, long, default_value = "TSLA")]
        ticker: String,

        /// Number of days to predict (1-30)
        #[arg(short, long, default_value_t = 14)]
        days: u32,

        /// Seed for a reproducible forecast
        #[arg(long)]
        seed: Option<u64>,

        /// Print the headline figures instead of the full series
        #[arg(long)]
        summary: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, simulated_latency_ms } => {
                serve(bind_address, simulated_latency_ms).await?;
            }
            Commands::Generate { ticker, days, seed, summary } => {
                generate(GenerateOptions { ticker, days, seed, summary })?;
            }
        }
        Ok(())
    }
}

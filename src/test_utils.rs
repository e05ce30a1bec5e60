#[cfg(test)]
pub mod test_utils {
    use std::time::Duration;

    use crate::config::{initialize_app_state, AppConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState for testing with the built-in generator configuration
    pub fn setup_test_app_state() -> AppState {
        initialize_app_state(&AppConfig::default()).expect("Failed to initialize test app state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        create_router(setup_test_app_state())
    }

    /// Create axum app whose forecast endpoints wait `latency` before answering
    pub fn setup_test_app_with_latency(latency: Duration) -> Router {
        let _ = init_test_tracing();

        let mut state = setup_test_app_state();
        state.simulated_latency = latency;
        create_router(state)
    }
}

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, load_config};
use crate::router::create_router;

pub async fn serve(bind_address: Option<String>, simulated_latency_ms: Option<u64>) -> Result<()> {
    trace!("Entering serve function");
    info!("Stockcast application starting up");

    // Load configuration
    trace!("Loading configuration");
    let mut app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };
    if let Some(bind_address) = bind_address {
        app_config.server.bind_address = bind_address;
    }
    if let Some(latency) = simulated_latency_ms {
        app_config.server.simulated_latency_ms = latency;
    }
    let bind_address = app_config.server.bind_address.clone();
    debug!("Bind address: {}", bind_address);
    debug!("Simulated latency: {:?}", app_config.simulated_latency());

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&app_config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {:#}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Stockcast API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}

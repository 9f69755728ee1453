use tracing::{error, info};
use weather_vibes_svc::app::{create_app, init_tracing};
use weather_vibes_svc::config::Config;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    init_tracing();

    info!("Starting Weather Vibes Service...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let bind_address = config.bind_address();
    let server_url = config.server_url();

    // Create the application
    let app = match create_app(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create app: {}", e);
            std::process::exit(1);
        }
    };

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            info!("Server running on {}", server_url);
            info!("Health check: GET /health");
            info!("Weather vibes endpoint: POST /api/weather-vibes");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", bind_address, e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}

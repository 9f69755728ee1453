use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::agent::AgentClient;
use crate::config::Config;
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "weather_vibes_svc=info,tower_http=debug,axum::rejection=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Immutable per-process state shared with the handlers
#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub config: Config,
    /// Present only when an upstream agent URL is configured
    pub agent: Option<AgentClient>,
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let agent = match &config.agent_url {
        Some(url) => {
            info!("Proxy strategy active, upstream agent at {}", url);
            Some(AgentClient::new(url)?)
        }
        None => {
            info!("No AGENT_URL configured, mock strategy active");
            None
        }
    };

    Ok(Router::new()
        .merge(create_routes())
        .layer(Extension(ServiceContext { config, agent }))
        .layer(CorsLayer::permissive()))
}

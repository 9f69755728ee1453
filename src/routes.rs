use crate::handlers::{health_check, method_not_allowed, weather_vibes_handler};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new().route("/health", get(health_check)).route(
        "/api/weather-vibes",
        post(weather_vibes_handler).fallback(method_not_allowed),
    )
}

use axum::{
    Extension,
    extract::{Json, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use tracing::{debug, info, warn};

use crate::agent::UpstreamError;
use crate::app::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::format::format_weather_report;
use crate::mock::mock_vibes;
use crate::models::{HealthResponse, ReportEnvelope, VibesRequest, VibesResponse};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Fallback for non-POST requests to the weather vibes endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Weather vibes handler.
///
/// Validates the location, then either proxies to the configured upstream
/// agent or falls back to the mock generator when no agent is configured.
pub async fn weather_vibes_handler(
    Extension(ctx): Extension<ServiceContext>,
    payload: Result<Json<VibesRequest>, JsonRejection>,
) -> AppResult<ResponseJson<VibesResponse>> {
    // A missing or malformed body gets the same envelope as a missing field
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!("Request body rejected: {}", rejection);
            return Err(AppError::ValidationError("Location is required".to_string()));
        }
    };

    let Some(location) = payload.location() else {
        return Err(AppError::ValidationError("Location is required".to_string()));
    };

    info!("Weather vibes requested for '{}'", location);

    let Some(agent) = &ctx.agent else {
        debug!("No upstream agent configured, using the mock generator");
        return Ok(ResponseJson(VibesResponse::Mock(mock_vibes(location))));
    };

    let mut weather = agent.fetch_vibes(location).await.map_err(|err| {
        warn!("Upstream call failed: {}", err);
        match err {
            UpstreamError::TimedOut => AppError::GatewayTimeout,
            UpstreamError::ConnectionRefused => AppError::ServiceUnavailable,
            UpstreamError::Transport(_) => AppError::BadGateway,
            UpstreamError::Api { status, message } => AppError::Upstream { status, message },
            UpstreamError::Other(detail) => AppError::Internal {
                detail: (!ctx.config.is_production()).then_some(detail),
            },
        }
    })?;

    // Some agents omit the location in their payload; echo the request's
    if weather.location.is_empty() {
        weather.location = location.to_string();
    }

    let response = format_weather_report(&weather);
    let envelope = if weather.mock_data {
        ReportEnvelope {
            response,
            warning: Some("The weather agent is running on mock data.".to_string()),
            missing_api_keys: Some(weather.missing_api_keys.clone()),
        }
    } else {
        ReportEnvelope {
            response,
            warning: None,
            missing_api_keys: None,
        }
    };

    info!("Successfully processed weather vibes for '{}'", weather.location);
    Ok(ResponseJson(VibesResponse::Report(envelope)))
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    MethodNotAllowed,
    GatewayTimeout,
    ServiceUnavailable,
    BadGateway,
    /// Non-2xx from the upstream agent, status and message forwarded as-is
    Upstream {
        status: u16,
        message: String,
    },
    /// Unexpected failure; detail is populated only outside production
    Internal {
        detail: Option<String>,
    },
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::ValidationError(msg) => {
                warn!("Validation failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            AppError::GatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Request timed out while connecting to the weather service".to_string(),
                None,
            ),
            AppError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Weather service is currently unavailable".to_string(),
                None,
            ),
            AppError::BadGateway => (
                StatusCode::BAD_GATEWAY,
                "Network error while connecting to weather service".to_string(),
                None,
            ),
            AppError::Upstream { status, message } => {
                warn!("Upstream agent returned {}: {}", status, message);
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, message, None)
            }
            AppError::Internal { detail } => {
                error!(
                    "Internal server error: {}",
                    detail.as_deref().unwrap_or("no detail")
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to connect to backend agent".to_string(),
                    detail,
                )
            }
        };

        let body = Json(ErrorResponse { error, message });

        (status, body).into_response()
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let response = AppError::ValidationError("Location is required".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn upstream_failures_map_to_distinct_gateway_codes() {
        assert_eq!(
            AppError::GatewayTimeout.into_response().status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::ServiceUnavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::BadGateway.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_status_is_forwarded() {
        let response = AppError::Upstream {
            status: 418,
            message: "teapot".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}

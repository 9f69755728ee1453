use std::time::Duration;

use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::AgentWeather;

/// Upper bound for a single outbound call; there are no retries
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_UPSTREAM_ERROR: &str = "Error connecting to backend agent";

/// Closed classification of outbound-call failures. The handler maps each
/// variant to a response status; nothing inspects error message text.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    TimedOut,
    #[error("upstream connection refused")]
    ConnectionRefused,
    #[error("upstream transport error: {0}")]
    Transport(String),
    #[error("upstream returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::TimedOut
        } else if err.is_connect() {
            UpstreamError::ConnectionRefused
        } else if err.is_decode() {
            UpstreamError::Other(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// HTTP client for the upstream weather agent
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: Client,
    endpoint: String,
}

impl AgentClient {
    pub fn new(endpoint: &str) -> reqwest::Result<Self> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    /// Same as [`AgentClient::new`] with a caller-chosen timeout, used by
    /// tests to simulate slow upstreams quickly
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Fetches weather data for a location from the upstream agent.
    ///
    /// Non-2xx responses are turned into [`UpstreamError::Api`] with the
    /// message extracted best-effort from a JSON error body.
    pub async fn fetch_vibes(&self, location: &str) -> Result<AgentWeather, UpstreamError> {
        info!("Requesting weather vibes from {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "location": location }))
            .send()
            .await?;

        let status = response.status();
        debug!("Upstream agent responded with status {}", status);

        if !status.is_success() {
            let message = extract_error_message(response).await;
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<AgentWeather>().await?)
    }
}

/// Pulls the `error` field out of a JSON error body. Falls back to a generic
/// message when the body is not JSON, empty, or shaped differently.
async fn extract_error_message(response: Response) -> String {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains("application/json"));

    if !is_json {
        return DEFAULT_UPSTREAM_ERROR.to_string();
    }

    let bytes = match response.bytes().await {
        Ok(bytes) if !bytes.is_empty() => bytes,
        _ => return DEFAULT_UPSTREAM_ERROR.to_string(),
    };

    serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|error| error.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_UPSTREAM_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn success_response_is_deserialized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .and(body_json(serde_json::json!({ "location": "Paris" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": "Paris",
                "temperature": 20,
                "conditions": "Clear"
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(&format!("{}/agent", server.uri())).unwrap();
        let weather = client.fetch_vibes("Paris").await.unwrap();

        assert_eq!(weather.location, "Paris");
        assert_eq!(weather.temperature, Some(20.0));
        assert_eq!(weather.conditions.as_deref(), Some("Clear"));
        assert!(!weather.mock_data);
    }

    #[tokio::test]
    async fn json_error_body_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "agent exploded"
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(&format!("{}/agent", server.uri())).unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        match err {
            UpstreamError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "agent exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = AgentClient::new(&format!("{}/agent", server.uri())).unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        match err {
            UpstreamError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, DEFAULT_UPSTREAM_ERROR);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn json_error_body_without_error_field_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "detail": "something else" })),
            )
            .mount(&server)
            .await;

        let client = AgentClient::new(&format!("{}/agent", server.uri())).unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        match err {
            UpstreamError::Api { message, .. } => assert_eq!(message, DEFAULT_UPSTREAM_ERROR),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_upstream_is_classified_as_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "location": "Paris" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = AgentClient::with_timeout(
            &format!("{}/agent", server.uri()),
            Duration::from_millis(50),
        )
        .unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        assert!(matches!(err, UpstreamError::TimedOut), "got {err:?}");
    }

    #[tokio::test]
    async fn aborted_connection_is_classified_as_transport_error() {
        // Accept the connection, read the request, then hang up without
        // sending any response
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            use tokio::io::AsyncReadExt;
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
            }
        });

        let client = AgentClient::new(&format!("http://{addr}/agent")).unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_classified_as_connection_refused() {
        // Bind then drop a listener so the port is free but nothing accepts
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AgentClient::new(&format!("http://{addr}/agent")).unwrap();
        let err = client.fetch_vibes("Paris").await.unwrap_err();

        assert!(matches!(err, UpstreamError::ConnectionRefused), "got {err:?}");
    }
}

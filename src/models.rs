use serde::{Deserialize, Serialize};

/// Request payload for the weather vibes endpoint
#[derive(Debug, Deserialize)]
pub struct VibesRequest {
    #[serde(default)]
    pub location: Option<String>,
}

impl VibesRequest {
    /// Returns the trimmed location, or None when it is missing or empty
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }
}

/// Weather payload returned by the upstream agent service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentWeather {
    #[serde(default)]
    pub location: String,
    pub temperature: Option<f64>,
    pub conditions: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub mock_data: bool,
    #[serde(default)]
    pub missing_api_keys: Vec<String>,
}

/// A single music video suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
}

impl Recommendation {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Weather section of the mock envelope
#[derive(Debug, Clone, Serialize)]
pub struct MockWeather {
    pub temperature: f64,
    pub unit: String,
    pub condition: String,
    pub forecast: String,
}

/// Envelope returned by the mock strategy
#[derive(Debug, Serialize)]
pub struct MockEnvelope {
    pub location: String,
    pub weather: MockWeather,
    pub need_umbrella: bool,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: String,
}

/// Envelope returned by the proxy strategy
#[derive(Debug, Serialize)]
pub struct ReportEnvelope {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_api_keys: Option<Vec<String>>,
}

/// Success envelope for the weather vibes endpoint, shape depends on the
/// active strategy
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VibesResponse {
    Report(ReportEnvelope),
    Mock(MockEnvelope),
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

//! HTTP API Response Types

use serde::{Deserialize, Serialize};

pub const MISSING_URL_MESSAGE: &str = "No URL provided. Please include a 'url' parameter.";

/// Query string of `GET /api/seo-data`
#[derive(Debug, Clone, Default)]
pub struct SeoDataParams {
    pub url: Option<String>,
}

impl SeoDataParams {
    /// Build from decoded query pairs. A repeated `url` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value);
        Self { url }
    }

    /// The `url` parameter, treating an empty value as absent.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn missing_url() -> Self {
        Self::new(MISSING_URL_MESSAGE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "API is running".to_string(),
        }
    }
}

/// Static descriptor served at `/`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub endpoints: EndpointList,
    pub example: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointList {
    #[serde(rename = "GET /api/seo-data")]
    pub seo_data: &'static str,
    pub parameters: EndpointParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointParameters {
    pub url: &'static str,
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        Self {
            message: "SEO Data API is running!",
            endpoints: EndpointList {
                seo_data: "Fetch SEO data for a domain",
                parameters: EndpointParameters {
                    url: "Domain URL (required)",
                },
            },
            example: "/api/seo-data?url=example.com",
        }
    }
}

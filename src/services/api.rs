use crate::config::Config;
use crate::models::{error::AppError, skip::Skip};
use reqwest::Url;
use serde::Deserialize;

const SKIPS_PATH: &str = "/api/skips/by-location";

/// Postcode and area the skip search is run for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(Config::DEFAULT_POSTCODE, Config::DEFAULT_AREA)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.area, self.postcode)
    }
}

// API CONFIGURATION
/// Configuration for the skip inventory client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    location: Location,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Full search URL with the location as query parameters.
    pub fn skips_url(&self) -> Result<Url, AppError> {
        let base = format!("{}{SKIPS_PATH}", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            [
                ("postcode", self.location.postcode.as_str()),
                ("area", self.location.area.as_str()),
            ],
        )
        .map_err(|e| AppError::Config(format!("Invalid API URL {base}: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    location: Option<Location>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
            location: self.location.unwrap_or_default(),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug, Default)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Decodes a response from the by-location endpoint.
///
/// The status is checked before the body is parsed: a failed request reports
/// the body's `error` field when there is one and the generic fallback
/// otherwise, even if the body is not JSON. Only a successful response whose
/// body is not an array of skips counts as malformed.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<Skip>, AppError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Config::FETCH_FALLBACK_MESSAGE.to_string());
        return Err(AppError::Api { status, message });
    }

    serde_json::from_str(body)
        .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {e}")))
}

// SKIP CLIENT
/// HTTP client for the skip inventory API.
pub struct SkipClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SkipClient {
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Loads the skips offered at the configured location, in API order.
    pub async fn fetch_skips(&self) -> Result<Vec<Skip>, AppError> {
        let url = self.config.skips_url()?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;

        interpret_response(status, &body)
    }
}

/// Converts a reqwest error into a network failure.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Network(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::Network(format!("Request error: {error}"))
    } else {
        AppError::Network(format!("Network error: {error}"))
    }
}

/// Fetches skips for `config` with a fresh client.
pub async fn fetch_skips(config: ApiConfig) -> Result<Vec<Skip>, AppError> {
    SkipClient::with_config(config)?.fetch_skips().await
}

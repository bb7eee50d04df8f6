//! Main ShotAPI client implementation.

use crate::config::{
    RetryConfig, ShotApiConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL,
    DEFAULT_BATCH_PACING, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT,
};
use reqwest::{Client as HttpClient, StatusCode};
use shotapi_core::{
    validate_options, ApiErrorBody, Device, DevicePresetConfig, QueryParams, Result,
    ScreenshotOptions, ScreenshotResponse, ShotError,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Code assigned to error responses that do not name one
const HTTP_ERROR_CODE: &str = "HTTP_ERROR";

/// ShotAPI client
///
/// Cheap to clone; clones share the HTTP connection pool and configuration.
#[derive(Clone)]
pub struct ShotClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    config: ShotApiConfig,
}

impl ShotClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ShotClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ShotClientBuilder {
        ShotClientBuilder::new(api_key)
    }

    /// Create a client from `SHOTAPI_API_KEY` and optional `SHOTAPI_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| ShotError::MissingApiKey)?;
        let mut builder = ShotClientBuilder::new(key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ShotApiConfig {
        &self.inner.config
    }

    /// Capture a screenshot
    pub async fn screenshot(&self, options: &ScreenshotOptions) -> Result<ScreenshotResponse> {
        let url = self.screenshot_url(options)?;
        self.execute(&url).await
    }

    /// Build the request URL for `options` without sending it
    pub fn screenshot_url(&self, options: &ScreenshotOptions) -> Result<String> {
        validate_options(options)?;
        let params = QueryParams::build(&self.inner.config.api_key, options);
        Ok(self.request_url(&params))
    }

    /// Capture a screenshot and download the rendered file
    pub async fn screenshot_bytes(&self, options: &ScreenshotOptions) -> Result<Vec<u8>> {
        let response = self.screenshot(options).await?;
        self.fetch_image(&response.url).await
    }

    /// Capture a screenshot and write the rendered file to `path`
    pub async fn screenshot_to_file(
        &self,
        options: &ScreenshotOptions,
        path: impl AsRef<Path>,
    ) -> Result<ScreenshotResponse> {
        let response = self.screenshot(options).await?;
        self.save_image(&response.url, path).await?;
        Ok(response)
    }

    /// Download a rendered image or thumbnail
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "fetching image");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShotError::ImageFetch {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        Ok(bytes.to_vec())
    }

    /// Download a rendered image and write it to `path`, creating parent directories
    pub async fn save_image(&self, url: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.fetch_image(url).await?;
        write_file(path.as_ref(), &bytes).await
    }

    /// Available device presets
    #[must_use]
    pub fn devices(&self) -> Vec<(Device, DevicePresetConfig)> {
        Device::ALL.into_iter().map(|d| (d, d.config())).collect()
    }

    /// Run a fully built request through the retry state machine
    pub(crate) async fn execute(&self, url: &str) -> Result<ScreenshotResponse> {
        self.inner
            .config
            .retry
            .run(|attempt| async move {
                debug!(attempt, "GET screenshot");
                self.attempt(url).await
            })
            .await
    }

    /// A single HTTP attempt, classified
    async fn attempt(&self, url: &str) -> Result<ScreenshotResponse> {
        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    fn request_url(&self, params: &QueryParams) -> String {
        let url = format!("{}?{}", self.inner.config.endpoint(), params.to_query_string());
        debug!(
            url = %format!("{}?{}", self.inner.config.endpoint(), params.redacted().to_query_string()),
            "built request URL"
        );
        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response(&self, response: reqwest::Response) -> Result<ScreenshotResponse> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(&e))?;
            serde_json::from_str(&body)
                .map_err(|e| ShotError::Unknown(format!("invalid response body: {e}")))
        } else {
            Err(Self::error_from_body(status, &response.text().await.unwrap_or_default()))
        }
    }

    /// Convert an error response into a [`ShotError`]; a body without its own
    /// code is tagged `HTTP_ERROR`
    fn error_from_body(status: StatusCode, body: &str) -> ShotError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => ShotError::Api {
                status: status.as_u16(),
                message: parsed.error,
                code: Some(parsed.code.unwrap_or_else(|| HTTP_ERROR_CODE.to_string())),
                details: parsed.details,
            },
            Err(_) => ShotError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            },
        }
    }

    /// Classify a transport-level failure
    fn transport_error(&self, err: &reqwest::Error) -> ShotError {
        if err.is_timeout() {
            ShotError::Timeout(duration_ms(self.inner.config.timeout))
        } else if err.is_decode() || err.is_builder() {
            ShotError::Unknown(err.to_string())
        } else {
            ShotError::Network(err.to_string())
        }
    }
}

impl std::fmt::Debug for ShotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "saved capture");
    Ok(())
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Builder for configuring a [`ShotClient`]
pub struct ShotClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
    max_concurrent: usize,
    batch_pacing: Duration,
}

impl ShotClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("shotapi-rust/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            batch_pacing: DEFAULT_BATCH_PACING,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after the first attempt
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retry_config.max_retries = retries;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Set the maximum number of concurrent batch requests (at least 1)
    #[must_use]
    pub fn max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max.max(1);
        self
    }

    /// Set the pause between batch chunks
    #[must_use]
    pub const fn batch_pacing(mut self, pacing: Duration) -> Self {
        self.batch_pacing = pacing;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ShotClient> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ShotError::MissingApiKey);
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ShotError::Unknown(format!("failed to build HTTP client: {e}")))?;

        let config = ShotApiConfig {
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
            retry: self.retry_config,
            max_concurrent: self.max_concurrent,
            batch_pacing: self.batch_pacing,
            user_agent: self.user_agent,
        };

        Ok(ShotClient {
            inner: Arc::new(ClientInner { http, config }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key() {
        assert!(matches!(ShotClient::new(""), Err(ShotError::MissingApiKey)));
        assert!(matches!(ShotClient::new("   "), Err(ShotError::MissingApiKey)));
    }

    #[test]
    fn test_builder_defaults() {
        let client = ShotClient::new("key").unwrap();
        let config = client.config();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.max_concurrent, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let client = ShotClient::builder("key")
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(5))
            .retries(4)
            .max_concurrent(0)
            .build()
            .unwrap();
        let config = client.config();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.retry.max_retries, 4);
        assert_eq!(config.max_concurrent, 1);
    }

    #[test]
    fn test_screenshot_url() {
        let client = ShotClient::builder("key").base_url("http://localhost").build().unwrap();
        let url = client
            .screenshot_url(&ScreenshotOptions::new("https://example.com").full_page(true))
            .unwrap();
        assert_eq!(
            url,
            "http://localhost/api/v1/screenshot?url=https%3A%2F%2Fexample.com&api_key=key&full_page=true"
        );
    }

    #[test]
    fn test_screenshot_url_validates() {
        let client = ShotClient::new("key").unwrap();
        let err = client
            .screenshot_url(&ScreenshotOptions::new("https://example.com").quality(0))
            .unwrap_err();
        assert_eq!(err.code(), Some("INVALID_QUALITY"));
    }

    #[test]
    fn test_error_from_body() {
        let err = ShotClient::error_from_body(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Invalid API key","code":"INVALID_API_KEY"}"#,
        );
        assert_eq!(err.code(), Some("INVALID_API_KEY"));
        assert_eq!(err.status_code(), Some(401));

        let err = ShotClient::error_from_body(StatusCode::CONFLICT, r#"{"error":"Busy"}"#);
        assert_eq!(err.code(), Some("HTTP_ERROR"));
        assert_eq!(err.to_string(), "API error (409): Busy");

        let err = ShotClient::error_from_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.code(), Some("HTTP_ERROR"));
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = ShotClient::new("sk_secret_value").unwrap();
        assert!(!format!("{client:?}").contains("sk_secret_value"));
    }
}

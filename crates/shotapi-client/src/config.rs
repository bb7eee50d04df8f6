//! Client configuration types.

use std::time::Duration;

/// The ShotAPI production endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.shotapi.io";

/// Path of the screenshot endpoint, relative to the base URL
pub const SCREENSHOT_PATH: &str = "/api/v1/screenshot";

/// Default per-attempt deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries after the first attempt
pub const DEFAULT_RETRIES: u32 = 2;

/// Default ceiling on in-flight batch requests
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Pause between consecutive batch chunks
pub const DEFAULT_BATCH_PACING: Duration = Duration::from_millis(100);

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "SHOTAPI_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "SHOTAPI_BASE_URL";

/// Retry configuration for failed requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,

    /// Backoff before the first retry; doubled for each further retry
    pub initial_backoff: Duration,

    /// Maximum backoff duration
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Create a new retry configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_RETRIES,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
        }
    }

    /// Configuration that never retries
    #[must_use]
    pub const fn none() -> Self {
        Self::new().max_retries(0)
    }

    /// Set maximum retries
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate backoff after the given (zero-based) failed attempt
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }
}

/// Immutable settings of a [`ShotClient`](crate::ShotClient)
#[derive(Clone)]
pub struct ShotApiConfig {
    /// API key sent with every screenshot request
    pub api_key: String,

    /// Base URL of the service, without trailing slash
    pub base_url: String,

    /// Per-attempt deadline
    pub timeout: Duration,

    /// Retry policy
    pub retry: RetryConfig,

    /// Maximum requests in flight during a batch
    pub max_concurrent: usize,

    /// Pause between batch chunks
    pub batch_pacing: Duration,

    /// User-Agent header
    pub user_agent: String,
}

impl ShotApiConfig {
    /// Full URL of the screenshot endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{SCREENSHOT_PATH}", self.base_url)
    }
}

impl std::fmt::Debug for ShotApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotApiConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("max_concurrent", &self.max_concurrent)
            .field("batch_pacing", &self.batch_pacing)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

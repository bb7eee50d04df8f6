use thiserror::Error;

/// Result type alias for ShotAPI operations
pub type Result<T> = std::result::Result<T, ShotError>;

/// Errors that can occur when using the ShotAPI client
#[derive(Error, Debug)]
pub enum ShotError {
    /// Client constructed without an API key
    #[error("API key is required")]
    MissingApiKey,

    /// Screenshot options lack a target URL
    #[error("URL is required")]
    MissingUrl,

    /// Target URL is not an absolute http(s) URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Quality outside 1..=100
    #[error("quality must be between 1 and 100, got {0}")]
    InvalidQuality(i32),

    /// Delay outside 0..=10000 milliseconds
    #[error("delay must be between 0 and 10000 ms, got {0}")]
    InvalidDelay(i32),

    /// Width, height or thumbnail width of zero
    #[error("{field} must be a positive integer")]
    InvalidDimension {
        /// Option name
        field: &'static str,
    },

    /// Scale that is not a finite positive number
    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f64),

    /// API returned an error response with a structured body
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
        /// Machine-readable code from the API, if any
        code: Option<String>,
        /// Additional details from the API, if any
        details: Option<String>,
    },

    /// Non-2xx response whose body could not be parsed
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message synthesized from the status line
        message: String,
    },

    /// A single attempt exceeded its deadline
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Transport-level failure (DNS, connection reset, ...)
    #[error("network error: {0}")]
    Network(String),

    /// Fetching the rendered image returned a non-2xx status
    #[error("failed to fetch image: HTTP {status}")]
    ImageFetch {
        /// HTTP status code of the image response
        status: u16,
    },

    /// Retries exhausted without a recorded failure
    #[error("maximum retries exceeded")]
    MaxRetries,

    /// Failure that fits no other category
    #[error("unknown error: {0}")]
    Unknown(String),

    /// Local file persistence failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShotError {
    /// Machine-readable error code
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::MissingApiKey => Some("MISSING_API_KEY"),
            Self::MissingUrl => Some("MISSING_URL"),
            Self::InvalidUrl(_) => Some("INVALID_URL"),
            Self::InvalidQuality(_) => Some("INVALID_QUALITY"),
            Self::InvalidDelay(_) => Some("INVALID_DELAY"),
            Self::InvalidDimension { .. } => Some("INVALID_DIMENSION"),
            Self::InvalidScale(_) => Some("INVALID_SCALE"),
            Self::Api { code, .. } => code.as_deref(),
            Self::Http { .. } => Some("HTTP_ERROR"),
            Self::Timeout(_) => Some("TIMEOUT"),
            Self::Network(_) => Some("NETWORK_ERROR"),
            Self::ImageFetch { .. } => Some("IMAGE_FETCH_ERROR"),
            Self::MaxRetries => Some("MAX_RETRIES"),
            Self::Unknown(_) => Some("UNKNOWN_ERROR"),
            Self::Io(_) => None,
        }
    }

    /// Additional details supplied by the API
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Api { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code if the error came from a response
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Http { status, .. } | Self::ImageFetch { status } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns true if the error is retryable (5xx, timeout, network)
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } | Self::Http { status, .. } => *status >= 500,
            Self::Timeout(_) | Self::Network(_) => true,
            _ => false,
        }
    }

    /// Returns true if the error is raised before any network attempt
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::MissingUrl
                | Self::InvalidUrl(_)
                | Self::InvalidQuality(_)
                | Self::InvalidDelay(_)
                | Self::InvalidDimension { .. }
                | Self::InvalidScale(_)
        )
    }
}

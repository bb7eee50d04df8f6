use super::ImageFormat;
use serde::{Deserialize, Serialize};

/// Successful screenshot response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotResponse {
    /// URL of the rendered image or document
    pub url: String,

    /// URL of the thumbnail, when one was requested
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Properties of the rendered file
    pub metadata: ScreenshotMetadata,

    /// Credits charged for this capture
    #[serde(default)]
    pub credits_used: u32,

    /// Credits left on the account
    #[serde(default)]
    pub credits_remaining: u32,
}

/// Properties of a rendered capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotMetadata {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Output format
    pub format: ImageFormat,
    /// File size in bytes
    pub size: u64,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub error: String,
    /// Machine-readable code
    #[serde(default)]
    pub code: Option<String>,
    /// Additional details
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let json = r#"{
            "url": "https://cdn.example.com/shot.png",
            "thumbnailUrl": "https://cdn.example.com/thumb.png",
            "metadata": {"width": 1280, "height": 720, "format": "png", "size": 48213},
            "creditsUsed": 1,
            "creditsRemaining": 99
        }"#;
        let resp: ScreenshotResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.metadata.width, 1280);
        assert_eq!(resp.metadata.format, ImageFormat::Png);
        assert_eq!(resp.credits_remaining, 99);
        assert!(resp.thumbnail_url.is_some());
    }

    #[test]
    fn test_parse_error_body_minimal() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "Invalid API key"}"#).unwrap();
        assert_eq!(body.error, "Invalid API key");
        assert!(body.code.is_none());
        assert!(body.details.is_none());
    }
}

//! Pre-flight checks on screenshot options.

use crate::{Result, ScreenshotOptions, ShotError};
use std::ops::RangeInclusive;
use url::Url;

/// Accepted `quality` values
pub const QUALITY_RANGE: RangeInclusive<i32> = 1..=100;

/// Accepted `delay` values in milliseconds
pub const DELAY_RANGE: RangeInclusive<i32> = 0..=10_000;

/// Check options before any network I/O.
///
/// Rules are applied in a fixed order (URL presence, URL format, viewport,
/// scale, quality, delay, thumbnail width) and the first violation is
/// returned. Explicit viewport values are checked even when a device preset
/// will override them.
pub fn validate_options(options: &ScreenshotOptions) -> Result<()> {
    validate_url(&options.url)?;

    positive("width", options.width)?;
    positive("height", options.height)?;

    if let Some(scale) = options.scale {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ShotError::InvalidScale(scale));
        }
    }

    if let Some(quality) = options.quality {
        if !QUALITY_RANGE.contains(&quality) {
            return Err(ShotError::InvalidQuality(quality));
        }
    }

    if let Some(delay) = options.delay {
        if !DELAY_RANGE.contains(&delay) {
            return Err(ShotError::InvalidDelay(delay));
        }
    }

    positive("thumbnail_width", options.thumbnail_width)
}

fn positive(field: &'static str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(ShotError::InvalidDimension { field }),
        _ => Ok(()),
    }
}

/// Check that a target is a non-empty absolute http(s) URL
pub fn validate_url(raw: &str) -> Result<()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ShotError::MissingUrl);
    }

    let parsed = Url::parse(raw).map_err(|e| ShotError::InvalidUrl(format!("{raw}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ShotError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{scheme}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ScreenshotOptions {
        ScreenshotOptions::new("https://example.com")
    }

    #[test]
    fn test_missing_url() {
        let err = validate_options(&ScreenshotOptions::default()).unwrap_err();
        assert!(matches!(err, ShotError::MissingUrl));

        let err = validate_options(&ScreenshotOptions::new("   ")).unwrap_err();
        assert!(matches!(err, ShotError::MissingUrl));
    }

    #[test]
    fn test_invalid_url() {
        for bad in ["ftp://x", "not a url", "file:///etc/passwd", "example.com"] {
            let err = validate_options(&ScreenshotOptions::new(bad)).unwrap_err();
            assert_eq!(err.code(), Some("INVALID_URL"), "{bad} should be rejected");
        }
        assert!(validate_options(&ScreenshotOptions::new("http://localhost:3000/a?b=c")).is_ok());
    }

    #[test]
    fn test_quality_bounds() {
        for bad in [0, 101, -5] {
            let err = validate_options(&opts().quality(bad)).unwrap_err();
            assert!(matches!(err, ShotError::InvalidQuality(q) if q == bad));
        }
        for good in [1, 50, 100] {
            assert!(validate_options(&opts().quality(good)).is_ok());
        }
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        let err = validate_options(&opts().viewport(0, 720)).unwrap_err();
        assert!(matches!(err, ShotError::InvalidDimension { field: "width" }));

        let err = validate_options(&opts().viewport(1280, 0)).unwrap_err();
        assert!(matches!(err, ShotError::InvalidDimension { field: "height" }));

        let err = validate_options(&opts().thumbnail_width(0)).unwrap_err();
        assert_eq!(err.code(), Some("INVALID_DIMENSION"));

        assert!(validate_options(&opts().viewport(1, 1).thumbnail_width(200)).is_ok());
    }

    #[test]
    fn test_scale_must_be_finite_and_positive() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = validate_options(&opts().scale(bad)).unwrap_err();
            assert_eq!(err.code(), Some("INVALID_SCALE"), "{bad} should be rejected");
        }
        for good in [0.5, 1.0, 2.625] {
            assert!(validate_options(&opts().scale(good)).is_ok());
        }
    }

    #[test]
    fn test_combined_bad_numbers_rejected() {
        let options = opts().scale(f64::NAN).viewport(0, 0).thumbnail_width(0);
        assert_eq!(validate_options(&options).unwrap_err().code(), Some("INVALID_DIMENSION"));
    }

    #[test]
    fn test_delay_bounds() {
        for bad in [-1, 10_001] {
            let err = validate_options(&opts().delay(bad)).unwrap_err();
            assert_eq!(err.code(), Some("INVALID_DELAY"));
        }
        for good in [0, 2500, 10_000] {
            assert!(validate_options(&opts().delay(good)).is_ok());
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let options = ScreenshotOptions::new("ftp://x").quality(0).delay(-1);
        assert_eq!(validate_options(&options).unwrap_err().code(), Some("INVALID_URL"));

        let options = opts().quality(0).delay(-1);
        assert_eq!(validate_options(&options).unwrap_err().code(), Some("INVALID_QUALITY"));
    }
}

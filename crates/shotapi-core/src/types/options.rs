use super::Device;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format of the rendered capture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image
    #[default]
    Png,
    /// JPEG image
    Jpeg,
    /// WebP image
    Webp,
    /// PDF document
    Pdf,
}

impl ImageFormat {
    /// Wire name of the format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::Pdf => "pdf",
        }
    }

    /// File extension for saved captures
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            other => other.as_str(),
        }
    }

    /// Returns true if the `quality` option applies to this format
    #[must_use]
    pub const fn supports_quality(self) -> bool {
        matches!(self, Self::Jpeg | Self::Webp)
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!(
                "unknown format: {s} (expected png, jpeg, webp or pdf)"
            )),
        }
    }
}

/// A single screenshot request
///
/// Only `url` is required; every other field is omitted from the request
/// when unset (or `false` for flags). A named `device` overrides
/// `width`, `height`, `scale` and `mobile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotOptions {
    /// Page to capture
    pub url: String,

    /// Viewport width in CSS pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Viewport height in CSS pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Named device preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Capture the full scrollable page
    #[serde(default)]
    pub full_page: bool,

    /// Output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Compression quality (1-100) for jpeg/webp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,

    /// Device pixel ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,

    /// Milliseconds to wait before capturing (0-10000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i32>,

    /// CSS selector to wait for before capturing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,

    /// CSS selector of the element to capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// CSS injected into the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    /// JavaScript injected into the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_js: Option<String>,

    /// Block ads and trackers
    #[serde(default)]
    pub block_ads: bool,

    /// Hide cookie consent banners
    #[serde(default)]
    pub hide_cookie_banners: bool,

    /// Emulate `prefers-color-scheme: dark`
    #[serde(default)]
    pub dark_mode: bool,

    /// Emulate a mobile device
    #[serde(default)]
    pub mobile: bool,

    /// Also produce a thumbnail of this width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
}

impl ScreenshotOptions {
    /// Create options for the given URL with everything else unset
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Copy of these options targeting a different URL
    #[must_use]
    pub fn for_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self.clone()
        }
    }

    /// Set the viewport size
    #[must_use]
    pub const fn viewport(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Use a named device preset
    #[must_use]
    pub const fn device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    /// Capture the full scrollable page
    #[must_use]
    pub const fn full_page(mut self, full_page: bool) -> Self {
        self.full_page = full_page;
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the compression quality
    #[must_use]
    pub const fn quality(mut self, quality: i32) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the device pixel ratio
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Wait this many milliseconds before capturing
    #[must_use]
    pub const fn delay(mut self, delay_ms: i32) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    /// Wait for a CSS selector before capturing
    #[must_use]
    pub fn wait_for_selector(mut self, selector: impl Into<String>) -> Self {
        self.wait_for_selector = Some(selector.into());
        self
    }

    /// Capture only the element matching this CSS selector
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Inject custom CSS
    #[must_use]
    pub fn custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Inject custom JavaScript
    #[must_use]
    pub fn custom_js(mut self, js: impl Into<String>) -> Self {
        self.custom_js = Some(js.into());
        self
    }

    /// Block ads and trackers
    #[must_use]
    pub const fn block_ads(mut self, block: bool) -> Self {
        self.block_ads = block;
        self
    }

    /// Hide cookie consent banners
    #[must_use]
    pub const fn hide_cookie_banners(mut self, hide: bool) -> Self {
        self.hide_cookie_banners = hide;
        self
    }

    /// Render with a dark color scheme
    #[must_use]
    pub const fn dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    /// Emulate a mobile device
    #[must_use]
    pub const fn mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    /// Request a thumbnail of the given width
    #[must_use]
    pub const fn thumbnail_width(mut self, width: u32) -> Self {
        self.thumbnail_width = Some(width);
        self
    }

    /// Effective output format
    #[must_use]
    pub fn output_format(&self) -> ImageFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("webp".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert!("gif".parse::<ImageFormat>().is_err());
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert!(!ImageFormat::Png.supports_quality());
    }

    #[test]
    fn test_builder_methods() {
        let opts = ScreenshotOptions::new("https://example.com")
            .viewport(1280, 720)
            .format(ImageFormat::Webp)
            .quality(80)
            .dark_mode(true);

        assert_eq!(opts.width, Some(1280));
        assert_eq!(opts.height, Some(720));
        assert_eq!(opts.output_format(), ImageFormat::Webp);
        assert!(opts.dark_mode);
        assert!(!opts.full_page);
    }

    #[test]
    fn test_for_url_keeps_shared_fields() {
        let shared = ScreenshotOptions::default().device(Device::Pixel7).full_page(true);
        let item = shared.for_url("https://a.example");
        assert_eq!(item.url, "https://a.example");
        assert_eq!(item.device, Some(Device::Pixel7));
        assert!(item.full_page);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = serde_json::json!({
            "url": "https://example.com",
            "fullPage": true,
            "device": "iphone-14",
            "waitForSelector": "#app",
            "thumbnailWidth": 200
        });
        let opts: ScreenshotOptions = serde_json::from_value(json).unwrap();
        assert!(opts.full_page);
        assert_eq!(opts.device, Some(Device::Iphone14));
        assert_eq!(opts.wait_for_selector.as_deref(), Some("#app"));
        assert_eq!(opts.thumbnail_width, Some(200));
        assert_eq!(opts.output_format(), ImageFormat::Png);
    }
}

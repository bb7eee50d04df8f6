//! Mapping from [`ScreenshotOptions`] to wire query parameters.
//!
//! The viewport group (`width`, `height`, `mobile`, `scale`) is resolved
//! first because a device preset overrides all four explicit fields. Every
//! other option goes through [`OPTION_PARAMS`], a fixed table of wire names
//! and serializers; a serializer returning `None` omits the parameter.

use crate::{DevicePresetConfig, ScreenshotOptions};

/// Query value used for enabled flags
const TRUE: &str = "true";

/// Placeholder written in place of the API key by [`QueryParams::redacted`]
const REDACTED: &str = "***";

/// One entry of the option-to-parameter table
pub struct ParamRule {
    /// Wire name
    pub name: &'static str,
    /// Serializer; `None` omits the parameter
    pub value: fn(&ScreenshotOptions) -> Option<String>,
}

/// Non-viewport options, in emission order
pub const OPTION_PARAMS: &[ParamRule] = &[
    ParamRule {
        name: "full_page",
        value: |o| flag(o.full_page),
    },
    ParamRule {
        name: "format",
        value: |o| o.format.map(|f| f.as_str().to_string()),
    },
    ParamRule {
        name: "quality",
        value: |o| o.quality.map(|q| q.to_string()),
    },
    ParamRule {
        name: "delay",
        value: |o| o.delay.filter(|d| *d != 0).map(|d| d.to_string()),
    },
    ParamRule {
        name: "wait_for",
        value: |o| text(o.wait_for_selector.as_deref()),
    },
    ParamRule {
        name: "selector",
        value: |o| text(o.selector.as_deref()),
    },
    ParamRule {
        name: "custom_css",
        value: |o| text(o.custom_css.as_deref()),
    },
    ParamRule {
        name: "custom_js",
        value: |o| text(o.custom_js.as_deref()),
    },
    ParamRule {
        name: "block_ads",
        value: |o| flag(o.block_ads),
    },
    ParamRule {
        name: "hide_cookie_banners",
        value: |o| flag(o.hide_cookie_banners),
    },
    ParamRule {
        name: "dark_mode",
        value: |o| flag(o.dark_mode),
    },
    ParamRule {
        name: "thumbnail_width",
        value: |o| o.thumbnail_width.map(|w| w.to_string()),
    },
];

fn flag(on: bool) -> Option<String> {
    on.then(|| TRUE.to_string())
}

fn text(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Viewport settings after preset resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: Option<u32>,
    /// Height in CSS pixels
    pub height: Option<u32>,
    /// Mobile emulation
    pub mobile: bool,
    /// Device pixel ratio
    pub scale: Option<f64>,
}

impl Viewport {
    /// Resolve the viewport for a request; a named preset wins unconditionally
    #[must_use]
    pub fn resolve(options: &ScreenshotOptions) -> Self {
        options.device.map_or(
            Self {
                width: options.width,
                height: options.height,
                mobile: options.mobile,
                scale: options.scale,
            },
            |device| Self::from_preset(device.config()),
        )
    }

    #[allow(clippy::float_cmp)]
    fn from_preset(preset: DevicePresetConfig) -> Self {
        Self {
            width: Some(preset.width),
            height: Some(preset.height),
            mobile: preset.mobile,
            scale: (preset.scale != 1.0).then_some(preset.scale),
        }
    }
}

/// Ordered query parameters for a screenshot request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Build the parameters for a validated request.
    ///
    /// Pure and infallible: validation is expected to have run already.
    #[must_use]
    pub fn build(api_key: &str, options: &ScreenshotOptions) -> Self {
        let mut params = Self::default();
        params.push("url", options.url.trim().to_string());
        params.push("api_key", api_key.to_string());

        let viewport = Viewport::resolve(options);
        if let Some(width) = viewport.width {
            params.push("width", width.to_string());
        }
        if let Some(height) = viewport.height {
            params.push("height", height.to_string());
        }
        if viewport.mobile {
            params.push("mobile", TRUE.to_string());
        }
        if let Some(scale) = viewport.scale {
            params.push("scale", scale.to_string());
        }

        for rule in OPTION_PARAMS {
            if let Some(value) = (rule.value)(options) {
                params.push(rule.name, value);
            }
        }

        params
    }

    fn push(&mut self, name: &'static str, value: String) {
        self.pairs.push((name, value));
    }

    /// Value of a parameter, if emitted
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the parameter was emitted
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in emission order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of emitted parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing was emitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encoded query string
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Copy with the API key masked, for logging and display
    #[must_use]
    pub fn redacted(&self) -> Self {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if *k == "api_key" {
                    (*k, REDACTED.to_string())
                } else {
                    (*k, v.clone())
                }
            })
            .collect();
        Self { pairs }
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Viewport configuration behind a named device preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePresetConfig {
    /// Viewport width in CSS pixels
    pub width: u32,
    /// Viewport height in CSS pixels
    pub height: u32,
    /// Emulate a mobile device
    pub mobile: bool,
    /// Device pixel ratio
    pub scale: f64,
}

/// Named device preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Device {
    /// Full HD desktop
    Desktop,
    /// Common laptop screen
    Laptop,
    /// Generic tablet
    Tablet,
    /// Generic phone
    Mobile,
    /// Apple iPhone 14
    #[serde(rename = "iphone-14")]
    Iphone14,
    /// Apple iPhone 14 Pro
    #[serde(rename = "iphone-14-pro")]
    Iphone14Pro,
    /// Apple iPhone 14 Pro Max
    #[serde(rename = "iphone-14-pro-max")]
    Iphone14ProMax,
    /// Apple iPad
    Ipad,
    /// Apple iPad Pro
    IpadPro,
    /// Samsung Galaxy S23
    #[serde(rename = "galaxy-s23")]
    GalaxyS23,
    /// Google Pixel 7
    #[serde(rename = "pixel-7")]
    Pixel7,
}

impl Device {
    /// Every preset, in table order
    pub const ALL: [Self; 11] = [
        Self::Desktop,
        Self::Laptop,
        Self::Tablet,
        Self::Mobile,
        Self::Iphone14,
        Self::Iphone14Pro,
        Self::Iphone14ProMax,
        Self::Ipad,
        Self::IpadPro,
        Self::GalaxyS23,
        Self::Pixel7,
    ];

    /// Wire name of the preset
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Laptop => "laptop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
            Self::Iphone14 => "iphone-14",
            Self::Iphone14Pro => "iphone-14-pro",
            Self::Iphone14ProMax => "iphone-14-pro-max",
            Self::Ipad => "ipad",
            Self::IpadPro => "ipad-pro",
            Self::GalaxyS23 => "galaxy-s23",
            Self::Pixel7 => "pixel-7",
        }
    }

    /// Viewport configuration for this preset
    #[must_use]
    pub fn config(self) -> DevicePresetConfig {
        let (width, height, mobile, scale) = match self {
            Self::Desktop => (1920, 1080, false, 1.0),
            Self::Laptop => (1366, 768, false, 1.0),
            Self::Tablet => (768, 1024, true, 2.0),
            Self::Mobile => (375, 667, true, 2.0),
            Self::Iphone14 => (390, 844, true, 3.0),
            Self::Iphone14Pro => (393, 852, true, 3.0),
            Self::Iphone14ProMax => (430, 932, true, 3.0),
            Self::Ipad => (820, 1180, true, 2.0),
            Self::IpadPro => (1024, 1366, true, 2.0),
            Self::GalaxyS23 => (360, 780, true, 3.0),
            Self::Pixel7 => (412, 915, true, 2.625),
        };
        DevicePresetConfig {
            width,
            height,
            mobile,
            scale,
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| format!("unknown device preset: {s}"))
    }
}

/// Look up a preset configuration by name
#[must_use]
pub fn device_preset(name: &str) -> Option<DevicePresetConfig> {
    name.parse::<Device>().ok().map(Device::config)
}

/// Names of all available presets
#[must_use]
pub fn device_names() -> Vec<&'static str> {
    Device::ALL.iter().map(|d| d.name()).collect()
}

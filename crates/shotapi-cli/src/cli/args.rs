//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use shotapi::{Device, ImageFormat, ScreenshotOptions};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Command-line client for the ShotAPI screenshot service
///
/// Capture any public web page as PNG, JPEG, WebP or PDF.
///
/// Get your API key at: https://shotapi.io/dashboard
#[derive(Parser, Debug)]
#[command(name = "shotapi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// ShotAPI key (or set SHOTAPI_API_KEY env var)
    #[arg(short = 'k', long, env = "SHOTAPI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Service endpoint (or set SHOTAPI_BASE_URL env var)
    #[arg(long, env = "SHOTAPI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture a single URL
    Capture(CaptureArgs),

    /// Capture many URLs with shared options
    Batch(BatchArgs),

    /// Print the request URL without calling the service
    Url(UrlArgs),

    /// List device presets
    Devices,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Shared capture options
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct ShotFlags {
    /// Device preset (overrides --width/--height/--scale/--mobile)
    #[arg(short, long)]
    pub device: Option<Device>,

    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Device pixel ratio
    #[arg(long)]
    pub scale: Option<f64>,

    /// Emulate a mobile device
    #[arg(long)]
    pub mobile: bool,

    /// Capture the full scrollable page
    #[arg(long)]
    pub full_page: bool,

    /// Output format: png, jpeg, webp or pdf
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Compression quality for jpeg/webp (1-100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub quality: Option<i32>,

    /// Milliseconds to wait before capturing (0-10000)
    #[arg(long, allow_negative_numbers = true)]
    pub delay: Option<i32>,

    /// Wait for this CSS selector before capturing
    #[arg(long)]
    pub wait_for: Option<String>,

    /// Capture only the element matching this CSS selector
    #[arg(long)]
    pub selector: Option<String>,

    /// CSS to inject into the page
    #[arg(long)]
    pub css: Option<String>,

    /// JavaScript to inject into the page
    #[arg(long)]
    pub js: Option<String>,

    /// Block ads and trackers
    #[arg(long)]
    pub block_ads: bool,

    /// Hide cookie consent banners
    #[arg(long)]
    pub hide_cookie_banners: bool,

    /// Render with a dark color scheme
    #[arg(long)]
    pub dark_mode: bool,

    /// Also produce a thumbnail of this width
    #[arg(long)]
    pub thumbnail_width: Option<u32>,

    /// Per-attempt timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries after a failed attempt
    #[arg(long)]
    pub retries: Option<u32>,
}

impl ShotFlags {
    /// Build request options for one URL.
    #[must_use]
    pub fn to_options(&self, url: &str) -> ScreenshotOptions {
        ScreenshotOptions {
            url: url.to_string(),
            width: self.width,
            height: self.height,
            device: self.device,
            full_page: self.full_page,
            format: self.format,
            quality: self.quality,
            scale: self.scale,
            delay: self.delay,
            wait_for_selector: self.wait_for.clone(),
            selector: self.selector.clone(),
            custom_css: self.css.clone(),
            custom_js: self.js.clone(),
            block_ads: self.block_ads,
            hide_cookie_banners: self.hide_cookie_banners,
            dark_mode: self.dark_mode,
            mobile: self.mobile,
            thumbnail_width: self.thumbnail_width,
        }
    }
}

// ============================================================================
// Capture command
// ============================================================================

#[derive(Args, Debug)]
pub struct CaptureArgs {
    /// Page to capture
    pub url: String,

    #[command(flatten)]
    pub flags: ShotFlags,

    /// Download the capture to this file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

// ============================================================================
// Batch command
// ============================================================================

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Pages to capture
    #[arg(required = true)]
    pub urls: Vec<String>,

    #[command(flatten)]
    pub flags: ShotFlags,

    /// Maximum requests in flight
    #[arg(short = 'c', long)]
    pub max_concurrent: Option<usize>,

    /// Download every capture into this directory
    #[arg(short = 'D', long)]
    pub save_dir: Option<PathBuf>,
}

// ============================================================================
// Url command
// ============================================================================

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Page to capture
    pub url: String,

    #[command(flatten)]
    pub flags: ShotFlags,

    /// Print the API key instead of masking it
    #[arg(long)]
    pub show_key: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },

    /// Show the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_capture_flags() {
        let cli = Cli::parse_from([
            "shotapi",
            "capture",
            "https://example.com",
            "--device",
            "iphone-14-pro",
            "--format",
            "jpg",
            "--quality",
            "80",
            "--full-page",
            "--wait-for",
            "#app",
        ]);

        let Commands::Capture(args) = cli.command else {
            panic!("expected capture command");
        };
        let options = args.flags.to_options(&args.url);
        assert_eq!(options.device, Some(Device::Iphone14Pro));
        assert_eq!(options.format, Some(ImageFormat::Jpeg));
        assert_eq!(options.quality, Some(80));
        assert!(options.full_page);
        assert_eq!(options.wait_for_selector.as_deref(), Some("#app"));
    }

    #[test]
    fn test_batch_args() {
        let cli = Cli::parse_from([
            "shotapi", "-o", "json", "batch", "https://a.example", "https://b.example", "-c", "2",
        ]);

        assert_eq!(cli.output, Some(OutputFormat::Json));
        let Commands::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.max_concurrent, Some(2));
    }

    #[test]
    fn test_unknown_device_rejected() {
        let result = Cli::try_parse_from(["shotapi", "capture", "https://a.example", "-d", "nokia-3310"]);
        assert!(result.is_err());
    }
}

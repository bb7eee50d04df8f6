//! Command implementations.

pub mod batch;
pub mod capture;
pub mod config;
pub mod devices;
pub mod url;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use shotapi::{ShotClient, ShotClientBuilder};

use super::args::ShotFlags;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// ShotAPI key
    pub api_key: Option<String>,

    /// Service endpoint override
    pub base_url: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Loaded configuration file
    pub config: Config,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API key required.\n\n\
                 Set it with one of:\n  \
                 1. --api-key <KEY>\n  \
                 2. SHOTAPI_API_KEY environment variable\n  \
                 3. shotapi config set api_key <KEY>\n\n\
                 Get your key at: https://shotapi.io/dashboard"
            )
        })
    }

    /// Client builder with the key, endpoint and per-call flag overrides applied.
    pub fn client_builder(&self, flags: &ShotFlags) -> anyhow::Result<ShotClientBuilder> {
        let key = self.require_api_key()?;
        let mut builder = ShotClient::builder(key);

        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = flags.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = flags.retries {
            builder = builder.retries(retries);
        }
        if let Some(max) = self.config.max_concurrent {
            builder = builder.max_concurrent(max);
        }

        Ok(builder)
    }

    /// Create a ShotAPI client with the configured API key.
    pub fn client(&self, flags: &ShotFlags) -> anyhow::Result<ShotClient> {
        Ok(self.client_builder(flags)?.build()?)
    }

    /// Spinner for long-running calls; hidden for machine-readable output.
    #[must_use]
    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.output_format != OutputFormat::Pretty {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.into());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

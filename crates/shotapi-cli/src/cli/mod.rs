//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Flag and env are handled by clap; fall back to the config file
    let key_source = match (&cli.api_key, &config.api_key) {
        (Some(_), _) => "argument or environment",
        (None, Some(_)) => "config file",
        (None, None) => "unset",
    };
    let api_key = cli.api_key.or_else(|| config.api_key.clone());
    let base_url = cli.base_url.or_else(|| config.base_url.clone());

    debug!(
        key_source,
        base_url = base_url.as_deref().unwrap_or("default"),
        output = %output_format,
        "resolved CLI settings"
    );

    // Create context for commands
    let ctx = commands::Context {
        api_key,
        base_url,
        output_format,
        verbose: cli.verbose,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Capture(args) => commands::capture::execute(ctx, args).await,
        Commands::Batch(args) => commands::batch::execute(ctx, args).await,
        Commands::Url(args) => commands::url::execute(&ctx, &args),
        Commands::Devices => commands::devices::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

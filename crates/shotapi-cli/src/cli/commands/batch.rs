//! `shotapi batch` - Capture many URLs with shared options.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::debug;

use super::Context;
use crate::cli::args::BatchArgs;
use crate::config::expand_path;
use crate::output::{print_shot_pretty, to_csv, CsvShot, OutputFormat};
use shotapi::{ImageFormat, ScreenshotResponse};

pub async fn execute(ctx: Context, args: BatchArgs) -> Result<()> {
    let mut builder = ctx.client_builder(&args.flags)?;
    if let Some(max) = args.max_concurrent {
        builder = builder.max_concurrent(max);
    }
    let client = builder.build()?;

    let shared = args.flags.to_options("");
    let spinner = ctx.spinner(format!(
        "Capturing {} URLs ({} at a time)",
        args.urls.len(),
        client.config().max_concurrent
    ));
    let result = client.batch(&args.urls, &shared).await;
    spinner.finish_and_clear();
    let shots = result?;

    let save_dir = match &args.save_dir {
        Some(dir) => Some(expand_path(dir)?),
        None => ctx.config.expanded_output_dir()?,
    };

    let mut saved = Vec::with_capacity(shots.len());
    if let Some(dir) = &save_dir {
        debug!(dir = %dir.display(), count = shots.len(), "saving batch captures");
        for (index, (url, shot)) in args.urls.iter().zip(&shots).enumerate() {
            let path = dir.join(file_name(index, url, shot.metadata.format));
            client.save_image(&shot.url, &path).await?;
            saved.push(Some(path.display().to_string()));
        }
    } else {
        saved.resize(shots.len(), None);
    }

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shots)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&shots)?);
        }
        OutputFormat::Csv => {
            let rows = args.urls.iter().zip(&shots).map(|(url, shot)| CsvShot::new(url, shot));
            print!("{}", to_csv(rows)?);
        }
        OutputFormat::Pretty => {
            for ((url, shot), path) in args.urls.iter().zip(&shots).zip(&saved) {
                print_shot_pretty(url, shot, path.as_deref());
                println!();
            }
            print_summary(&shots, save_dir.as_deref());
        }
    }

    Ok(())
}

fn print_summary(shots: &[ScreenshotResponse], save_dir: Option<&Path>) {
    let credits: u32 = shots.iter().map(|s| s.credits_used).sum();
    println!(
        "{} {} captures, {} credits used",
        "Done:".green().bold(),
        shots.len(),
        credits
    );
    if let Some(dir) = save_dir {
        println!("  {} {}", "Saved to:".bold(), dir.display());
    }
}

/// File name for the `index`-th capture, derived from the page URL.
fn file_name(index: usize, url: &str, format: ImageFormat) -> String {
    let stem: String = url
        .split("://")
        .nth(1)
        .unwrap_or(url)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    let stem = stem.trim_matches('_');
    format!("{:03}-{}.{}", index + 1, stem, format.extension())
}

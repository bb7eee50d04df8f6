//! `shotapi capture` - Capture a single URL.

use anyhow::Result;

use super::Context;
use crate::cli::args::CaptureArgs;
use crate::config::expand_path;
use crate::output::{print_shot_pretty, to_csv, CsvShot, OutputFormat};

pub async fn execute(ctx: Context, args: CaptureArgs) -> Result<()> {
    let client = ctx.client(&args.flags)?;
    let options = args.flags.to_options(&args.url);

    let save_path = args.save.as_deref().map(expand_path).transpose()?;

    let spinner = ctx.spinner(format!("Capturing {}", args.url));
    let result = match &save_path {
        Some(path) => client.screenshot_to_file(&options, path).await,
        None => client.screenshot(&options).await,
    };
    spinner.finish_and_clear();
    let shot = result?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shot)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&shot)?);
        }
        OutputFormat::Csv => {
            print!("{}", to_csv([CsvShot::new(&args.url, &shot)])?);
        }
        OutputFormat::Pretty => {
            let saved = save_path.as_ref().map(|p| p.display().to_string());
            print_shot_pretty(&args.url, &shot, saved.as_deref());
        }
    }

    Ok(())
}

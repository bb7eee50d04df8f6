//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use shotapi::{ImageFormat, ScreenshotResponse};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Human-readable byte count.
#[must_use]
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

/// One CSV record for a capture.
#[derive(Debug, Serialize)]
pub struct CsvShot<'a> {
    source: &'a str,
    image: &'a str,
    thumbnail: &'a str,
    width: u32,
    height: u32,
    format: ImageFormat,
    size: u64,
    credits_used: u32,
    credits_remaining: u32,
}

impl<'a> CsvShot<'a> {
    #[must_use]
    pub fn new(source: &'a str, shot: &'a ScreenshotResponse) -> Self {
        Self {
            source,
            image: &shot.url,
            thumbnail: shot.thumbnail_url.as_deref().unwrap_or(""),
            width: shot.metadata.width,
            height: shot.metadata.height,
            format: shot.metadata.format,
            size: shot.metadata.size,
            credits_used: shot.credits_used,
            credits_remaining: shot.credits_remaining,
        }
    }
}

/// Render records as CSV with a header row taken from the field names.
pub fn to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Print a capture result in the pretty format.
pub fn print_shot_pretty(source: &str, shot: &ScreenshotResponse, saved_to: Option<&str>) {
    println!("{} {}", "Captured:".bold(), source.cyan().bold());
    println!("  {} {}", "Image:".bold(), shot.url);
    if let Some(thumb) = &shot.thumbnail_url {
        println!("  {} {}", "Thumbnail:".bold(), thumb);
    }
    println!(
        "  {} {}x{} {} ({})",
        "Size:".bold(),
        shot.metadata.width,
        shot.metadata.height,
        shot.metadata.format,
        human_size(shot.metadata.size)
    );
    if let Some(path) = saved_to {
        println!("  {} {}", "Saved:".bold(), path.green());
    }

    let remaining = shot.credits_remaining.to_string();
    let remaining = if shot.credits_remaining > 50 {
        remaining.green()
    } else if shot.credits_remaining > 10 {
        remaining.yellow()
    } else {
        remaining.red()
    };
    println!(
        "  {} {} used, {} remaining",
        "Credits:".bold(),
        shot.credits_used,
        remaining
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }

    fn shot(thumbnail: Option<&str>) -> ScreenshotResponse {
        serde_json::from_value(serde_json::json!({
            "url": "https://cdn.test/a.png",
            "thumbnailUrl": thumbnail,
            "metadata": {"width": 10, "height": 20, "format": "png", "size": 30},
            "creditsUsed": 1,
            "creditsRemaining": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_csv_shot() {
        let shot = shot(None);
        let text = to_csv([CsvShot::new("https://a.example", &shot)]).unwrap();
        assert_eq!(
            text,
            "source,image,thumbnail,width,height,format,size,credits_used,credits_remaining\n\
             https://a.example,https://cdn.test/a.png,,10,20,png,30,1,2\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas_and_quotes() {
        let shot = shot(Some("https://cdn.test/t.png"));
        let text = to_csv([CsvShot::new("https://a.example/?ids=1,2&q=\"x\"", &shot)]).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("\"https://a.example/?ids=1,2&q=\"\"x\"\"\",https://cdn.test/a.png,"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader.headers().unwrap().len();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), headers);
        assert_eq!(&record[0], "https://a.example/?ids=1,2&q=\"x\"");
        assert_eq!(&record[2], "https://cdn.test/t.png");
    }
}

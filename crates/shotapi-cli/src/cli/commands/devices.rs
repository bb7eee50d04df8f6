//! `shotapi devices` - List device presets.

use anyhow::Result;
use serde::Serialize;
use shotapi::Device;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::output::{to_csv, OutputFormat};

#[derive(Tabled, Serialize)]
struct DeviceRow {
    #[tabled(rename = "Preset")]
    name: &'static str,
    #[tabled(rename = "Width")]
    width: u32,
    #[tabled(rename = "Height")]
    height: u32,
    #[tabled(rename = "Mobile")]
    mobile: bool,
    #[tabled(rename = "Scale")]
    scale: f64,
}

fn rows() -> Vec<DeviceRow> {
    Device::ALL
        .into_iter()
        .map(|device| {
            let preset = device.config();
            DeviceRow {
                name: device.name(),
                width: preset.width,
                height: preset.height,
                mobile: preset.mobile,
                scale: preset.scale,
            }
        })
        .collect()
}

pub fn execute(ctx: &Context) -> Result<()> {
    let rows = rows();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&rows)?);
        }
        OutputFormat::Csv => {
            print!("{}", to_csv(&rows)?);
        }
        OutputFormat::Pretty => {
            let mut table = Table::new(&rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}

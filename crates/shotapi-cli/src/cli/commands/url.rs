//! `shotapi url` - Print the request URL without calling the service.

use anyhow::Result;
use serde::Serialize;
use shotapi::{validate_options, QueryParams};

use super::Context;
use crate::cli::args::UrlArgs;
use crate::output::{to_csv, OutputFormat};

#[derive(Serialize)]
struct ParamRow<'a> {
    param: &'a str,
    value: &'a str,
}

pub fn execute(ctx: &Context, args: &UrlArgs) -> Result<()> {
    let client = ctx.client(&args.flags)?;
    let options = args.flags.to_options(&args.url);
    validate_options(&options)?;

    let params = QueryParams::build(&client.config().api_key, &options);
    let params = if args.show_key { params } else { params.redacted() };
    let url = format!("{}?{}", client.config().endpoint(), params.to_query_string());

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let pairs: serde_json::Map<String, serde_json::Value> = params
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                .collect();
            let doc = serde_json::json!({ "url": url, "params": pairs });
            if ctx.output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{}", serde_yaml::to_string(&doc)?);
            }
        }
        OutputFormat::Csv => {
            let rows = params.iter().map(|(param, value)| ParamRow { param, value });
            print!("{}", to_csv(rows)?);
        }
        OutputFormat::Pretty => println!("{url}"),
    }

    Ok(())
}

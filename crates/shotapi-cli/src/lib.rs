//! # shotapi-cli
//!
//! Command-line interface for the ShotAPI screenshot service.
//!
//! ## Features
//!
//! - **Single captures**: `capture` with every request option as a flag
//! - **Batches**: `batch` fans out many URLs under a concurrency ceiling
//! - **Dry runs**: `url` prints the request URL without spending credits
//! - **Device presets**: `devices` lists the built-in viewports
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;

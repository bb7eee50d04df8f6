//! HTTP client for the ShotAPI screenshot service.
//!
//! This crate provides the main [`ShotClient`]: request execution with
//! per-attempt timeouts and exponential-backoff retries, concurrency-bounded
//! batches, and helpers to download or save the rendered files.

#![doc(html_root_url = "https://docs.rs/shotapi-client/2.0.0")]

mod batch;
mod client;
mod config;
pub mod retry;

pub use client::{ShotClient, ShotClientBuilder};
pub use config::*;
pub use shotapi_core::{Result, ShotError};

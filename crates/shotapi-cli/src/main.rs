//! shotapi - ShotAPI command-line client
//!
//! Capture websites from the terminal, one URL or many at once.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shotapi_cli::run().await
}

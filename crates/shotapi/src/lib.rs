//! Rust client for the ShotAPI screenshot service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shotapi::{Device, ScreenshotOptions, ShotClient};
//!
//! #[tokio::main]
//! async fn main() -> shotapi::Result<()> {
//!     let client = ShotClient::new("your-api-key")?;
//!
//!     // Single capture
//!     let shot = client
//!         .screenshot(&ScreenshotOptions::new("https://example.com").device(Device::Iphone14Pro))
//!         .await?;
//!     println!("Image: {} ({} credits left)", shot.url, shot.credits_remaining);
//!
//!     // Save straight to disk
//!     client
//!         .screenshot_to_file(&ScreenshotOptions::new("https://rust-lang.org").full_page(true), "out/rust.png")
//!         .await?;
//!
//!     // Many URLs, at most `max_concurrent` in flight
//!     let urls = ["https://a.example", "https://b.example", "https://c.example"];
//!     let shots = client.batch(&urls, &ScreenshotOptions::default()).await?;
//!     println!("Captured {} pages", shots.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/shotapi/2.0.0")]

// Re-export core types
pub use shotapi_core::*;

// Re-export client
pub use shotapi_client::{retry, RetryConfig, ShotApiConfig, ShotClient, ShotClientBuilder};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let client = ShotClient::new("key").unwrap();
        let url = client
            .screenshot_url(&ScreenshotOptions::new("https://example.com").device(Device::Laptop))
            .unwrap();
        assert!(url.contains("width=1366"));
        assert_eq!(device_names().len(), 11);
    }

    #[test]
    fn test_batch_without_urls_needs_no_network() {
        let client = ShotClient::new("key").unwrap();
        let urls: [&str; 0] = [];
        let shots = tokio_test::block_on(client.batch(&urls, &ScreenshotOptions::default())).unwrap();
        assert!(shots.is_empty());
    }
}

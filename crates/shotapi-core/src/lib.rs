//! Core types for the ShotAPI screenshot client.
//!
//! This crate holds everything that happens before a request leaves the
//! process:
//!
//! - **Types**: [`ScreenshotOptions`], [`ScreenshotResponse`] and the
//!   [`Device`] preset table
//! - **Validation**: [`validate_options`] rejects malformed requests
//! - **Parameters**: [`QueryParams::build`] maps options to the wire format
//! - **Errors**: [`ShotError`] with stable machine codes
//!
//! # Example
//!
//! ```rust
//! use shotapi_core::{validate_options, Device, QueryParams, ScreenshotOptions};
//!
//! let options = ScreenshotOptions::new("https://example.com").device(Device::Iphone14Pro);
//! validate_options(&options).unwrap();
//!
//! let params = QueryParams::build("my-key", &options);
//! assert_eq!(params.get("width"), Some("393"));
//! ```

#![doc(html_root_url = "https://docs.rs/shotapi-core/2.0.0")]

mod error;
pub mod params;
pub mod types;
mod validate;

pub use error::{Result, ShotError};
pub use params::{QueryParams, Viewport};
pub use types::*;
pub use validate::{validate_options, validate_url, DELAY_RANGE, QUALITY_RANGE};

//! # geocoder-rs
//!
//! Client for the Google Geocoding web service.
//!
//! Geocoding is the process of transforming a street address or other
//! description of a location into a (latitude, longitude) coordinate.
//! Reverse geocoding is the process of transforming a (latitude,
//! longitude) coordinate into a (partial) address. The amount of detail
//! in a reverse geocoded description may vary; one result might contain
//! the full street address of the closest building, another only a city
//! name and postal code.
//!
//! ## Features
//!
//! - **Typed results**: responses are parsed into [`Address`] values with
//!   structured geometry and per-component fields
//! - **Forward and reverse geocoding**: by location name or by coordinate
//! - **Typed errors**: quota, network, and malformed-data failures are
//!   distinguishable, so callers can react differently to each
//! - **Quota gate**: a persisted timestamp suppresses further requests
//!   for 24 hours once the service reports a sustained quota violation
//!
//! For more information on the underlying service visit
//! <https://developers.google.com/maps/documentation/geocoding/>
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geocoder_rs::{Geocoder, GeocoderConfig};
//!
//! # async fn run() -> Result<(), geocoder_rs::Error> {
//! let config = GeocoderConfig::builder()
//!     .language("en")
//!     .api_key("YOUR_API_KEY")
//!     .build();
//! let geocoder = Geocoder::new(config);
//!
//! let addresses = geocoder.geocode("1600 Amphitheatre Parkway", 5, true).await?;
//! if let Some(address) = addresses.first() {
//!     println!("Locality: {}", address.locality.as_deref().unwrap_or_default());
//!     println!("Country: {}", address.country.as_deref().unwrap_or_default());
//! }
//! # Ok(()) }
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod parser;
pub mod quota;
pub mod types;

// Re-export main API
pub use client::{Geocoder, HttpTransport, Transport};
pub use error::{Error, Result};
pub use parser::ResponseParser;
pub use quota::{FileQuotaStore, MemoryQuotaStore, QuotaStore};
pub use types::*;

use std::path::PathBuf;

use url::Url;

/// The geocoding endpoint queried by default.
const ENDPOINT_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Configuration for a [`Geocoder`].
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Endpoint the client sends its requests to
    pub endpoint: Url,

    /// Language the responses are localized for, as the `language` query
    /// parameter (e.g. "en", "de")
    pub language: String,

    /// API key identifying the application for quota management, sent as
    /// the `key` query parameter when non-empty
    pub api_key: Option<String>,

    /// Location of the quota gate file; `None` uses the default path
    /// under the user cache directory
    pub quota_path: Option<PathBuf>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(ENDPOINT_URL).expect("default endpoint is a valid URL"),
            language: "en".to_string(),
            api_key: None,
            quota_path: None,
        }
    }
}

impl GeocoderConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocoder_rs::GeocoderConfig;
    ///
    /// let config = GeocoderConfig::builder()
    ///     .language("de")
    ///     .api_key("YOUR_API_KEY")
    ///     .build();
    /// ```
    pub fn builder() -> GeocoderConfigBuilder {
        GeocoderConfigBuilder::new()
    }
}

/// Builder for [`GeocoderConfig`].
#[derive(Debug, Clone)]
pub struct GeocoderConfigBuilder {
    config: GeocoderConfig,
}

impl GeocoderConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: GeocoderConfig::default(),
        }
    }

    /// Set the endpoint to send requests to.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Set the language responses are localized for.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set a custom location for the quota gate file.
    pub fn quota_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.quota_path = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeocoderConfig {
        self.config
    }
}

impl Default for GeocoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

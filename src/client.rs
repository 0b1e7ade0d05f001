//! Geocoding client: request URLs, the network call, and the quota gate.

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use url::Url;

use crate::GeocoderConfig;
use crate::error::{Error, Result};
use crate::parser::ResponseParser;
use crate::quota::{FileQuotaStore, QuotaStore};
use crate::types::{Address, Status};

/// Delay before the single retry after a first `OVER_QUERY_LIMIT` answer.
const RETRY_DELAY: Duration = Duration::from_millis(2000);

/// How long the quota gate stays closed once the retry also fails.
const QUOTA_GATE: Duration = Duration::from_millis(86_400_000);

/// The HTTP GET a [`Geocoder`] performs for each lookup.
///
/// The default implementation is [`HttpTransport`]; tests and embedders
/// with their own HTTP stack can supply their own.
pub trait Transport {
    /// Fetch the body behind `url`.
    fn get(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.bytes().await?.to_vec())
    }
}

enum Query<'a> {
    Forward(&'a str),
    Reverse { latitude: f64, longitude: f64 },
}

/// A client for forward and reverse geocoding lookups.
///
/// Geocoding transforms a street address or other description of a
/// location into a (latitude, longitude) coordinate; reverse geocoding
/// transforms a coordinate into a (partial) address. Results are
/// localized for the configured language.
///
/// The client holds no mutable state besides the persisted quota gate,
/// so one instance can serve concurrent lookups.
///
/// # Examples
///
/// ```rust,no_run
/// use geocoder_rs::{Geocoder, GeocoderConfig};
///
/// # async fn run() -> Result<(), geocoder_rs::Error> {
/// let geocoder = Geocoder::new(GeocoderConfig::default());
/// let addresses = geocoder.reverse_geocode(37.4219999, -122.0840575, 1, false).await?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Geocoder<T = HttpTransport> {
    config: GeocoderConfig,
    transport: T,
    quota: Box<dyn QuotaStore + Send + Sync>,
}

impl Geocoder {
    /// Create a geocoder with the default HTTP transport and file-backed
    /// quota store.
    pub fn new(config: GeocoderConfig) -> Self {
        let quota = match &config.quota_path {
            Some(path) => FileQuotaStore::with_path(path),
            None => FileQuotaStore::new(),
        };
        Self {
            config,
            transport: HttpTransport::new(),
            quota: Box::new(quota),
        }
    }
}

impl<T: Transport> Geocoder<T> {
    /// Create a geocoder from its collaborators.
    ///
    /// `transport` performs the HTTP GET; `quota` persists the
    /// "earliest next allowed request" timestamp.
    pub fn with_parts(
        config: GeocoderConfig,
        transport: T,
        quota: Box<dyn QuotaStore + Send + Sync>,
    ) -> Self {
        Self {
            config,
            transport,
            quota,
        }
    }

    /// Look up addresses describing the named location.
    ///
    /// `location_name` may be a place name such as "Dalvik, Iceland", an
    /// address such as "1600 Amphitheatre Parkway, Mountain View, CA",
    /// an airport code such as "SFO", etc. At most `max_results`
    /// addresses are returned, in response order; smaller numbers
    /// (1 to 5) are recommended. `parse_address_components` controls
    /// whether the per-component fields of [`Address`] are populated.
    ///
    /// A first `OVER_QUERY_LIMIT` answer usually means too many calls
    /// per second, so the lookup is retried once after a short delay. If
    /// the retry is over quota too, the daily limit is exhausted: the
    /// quota gate closes for 24 hours and the lookup fails with
    /// [`Error::QuotaExceeded`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty `location_name`,
    /// [`Error::QuotaExceeded`] when the quota gate is closed,
    /// [`Error::Network`] for transport failures (never retried), and
    /// the parser's [`Error::MalformedResponse`] / [`Error::Status`]
    /// otherwise.
    pub async fn geocode(
        &self,
        location_name: &str,
        max_results: usize,
        parse_address_components: bool,
    ) -> Result<Vec<Address>> {
        if location_name.is_empty() {
            return Err(Error::invalid_argument("location_name is empty"));
        }
        self.check_quota_gate()?;

        let url = self.build_url(&Query::Forward(location_name));
        let parser = ResponseParser::new(max_results).with_address_components(parse_address_components);

        let data = self.transport.get(&url).await?;
        match parser.parse(&data) {
            Err(Error::Status {
                status: Status::OverQueryLimit,
                ..
            }) => {
                tokio::time::sleep(RETRY_DELAY).await;
                let data = self.transport.get(&url).await?;
                match parser.parse(&data) {
                    Err(Error::Status {
                        status: Status::OverQueryLimit,
                        ..
                    }) => {
                        // Over quota twice: not allowed again for 24 hours.
                        self.quota
                            .set_allowed_after(now_millis() + QUOTA_GATE.as_millis() as u64)?;
                        Err(Error::QuotaExceeded)
                    }
                    second => second,
                }
            }
            first => first,
        }
    }

    /// Look up addresses describing the area immediately surrounding the
    /// given coordinate.
    ///
    /// Unlike [`geocode`](Self::geocode), an `OVER_QUERY_LIMIT` answer is
    /// propagated immediately as [`Error::Status`], without a retry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `latitude` is outside [-90, 90] or
    /// `longitude` is outside [-180, 180]; otherwise as for
    /// [`geocode`](Self::geocode).
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
        max_results: usize,
        parse_address_components: bool,
    ) -> Result<Vec<Address>> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::invalid_argument(format!("latitude == {latitude}")));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::invalid_argument(format!("longitude == {longitude}")));
        }
        self.check_quota_gate()?;

        let url = self.build_url(&Query::Reverse {
            latitude,
            longitude,
        });
        let data = self.transport.get(&url).await?;
        ResponseParser::new(max_results)
            .with_address_components(parse_address_components)
            .parse(&data)
    }

    /// The configuration used by this geocoder.
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    fn check_quota_gate(&self) -> Result<()> {
        if now_millis() <= self.quota.allowed_after()? {
            return Err(Error::QuotaExceeded);
        }
        Ok(())
    }

    fn build_url(&self, query: &Query<'_>) -> Url {
        let mut url = self.config.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match query {
                Query::Forward(address) => {
                    // The sensor flag is unused upstream but kept for
                    // backward compatibility.
                    pairs.append_pair("sensor", "false");
                    pairs.append_pair("language", &self.config.language);
                    pairs.append_pair("address", address);
                }
                Query::Reverse {
                    latitude,
                    longitude,
                } => {
                    pairs.append_pair("sensor", "true");
                    pairs.append_pair("language", &self.config.language);
                    pairs.append_pair("latlng", &format!("{latitude},{longitude}"));
                }
            }
            if let Some(key) = &self.config.api_key {
                if !key.is_empty() {
                    pairs.append_pair("key", key);
                }
            }
        }
        url
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

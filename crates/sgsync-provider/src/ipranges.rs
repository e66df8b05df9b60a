//! Client for the published AWS IP ranges file.
//!
//! Fetches the dataset at most once per process lifetime and filters it
//! down to the CIDRs a given service publishes in the configured regions.

use crate::error::{ProviderError, ProviderResult};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

/// File published by Amazon with a list of their public CIDRs.
/// It changes periodically.
pub const IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Services removed from every result. EC2 is excluded because its space
/// contains public, customer-managed instance IPs.
const EXCLUDED_SERVICES: &[&str] = &["EC2"];

/// The deserialized IP ranges file
#[derive(Debug, Clone, Deserialize)]
pub struct IpRanges {
    /// Publication token
    #[serde(rename = "syncToken")]
    pub sync_token: String,

    /// Publication timestamp
    #[serde(rename = "createDate")]
    pub create_date: String,

    /// Published service CIDRs
    pub prefixes: Vec<Prefix>,
    // IPv6 prefixes not implemented
}

/// A single AWS service CIDR
#[derive(Debug, Clone, Deserialize)]
pub struct Prefix {
    /// CIDR block
    #[serde(rename = "ip_prefix")]
    pub ip_prefix: String,

    /// Region the block is published in
    pub region: String,

    /// Service name (e.g. "S3", "AMAZON")
    pub service: String,
}

/// Memoizing client for the IP ranges file, scoped to a set of regions
pub struct IpRangesClient {
    http: HttpClient,
    url: String,
    regions: Vec<String>,
    ranges: OnceCell<IpRanges>,
}

impl IpRangesClient {
    /// Create a client against the published AWS file
    #[must_use]
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_url(IP_RANGES_URL, regions)
    }

    /// Create a client against a custom URL (useful for testing)
    #[must_use]
    pub fn with_url<I, S>(url: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            url: url.into(),
            regions: regions.into_iter().map(Into::into).collect(),
            ranges: OnceCell::new(),
        }
    }

    /// The full IP ranges dataset, fetched at most once per process
    pub async fn ranges(&self) -> ProviderResult<&IpRanges> {
        self.ranges.get_or_try_init(|| self.fetch()).await
    }

    /// CIDRs a service publishes in the configured regions.
    ///
    /// A service with no matching prefixes yields an empty list, not an
    /// error. CIDRs also published for an excluded service are removed.
    pub async fn service_cidrs(&self, service: &str) -> ProviderResult<Vec<String>> {
        let unfiltered = self.unfiltered_service_cidrs(service).await?;

        let mut excluded = Vec::new();
        for name in EXCLUDED_SERVICES {
            excluded.extend(self.unfiltered_service_cidrs(name).await?);
        }

        Ok(unfiltered
            .into_iter()
            .filter(|cidr| !excluded.contains(cidr))
            .collect())
    }

    async fn unfiltered_service_cidrs(&self, service: &str) -> ProviderResult<Vec<String>> {
        let ranges = self.ranges().await?;

        Ok(ranges
            .prefixes
            .iter()
            .filter(|prefix| prefix.service == service)
            .filter(|prefix| self.regions.iter().any(|region| *region == prefix.region))
            .map(|prefix| prefix.ip_prefix.clone())
            .collect())
    }

    async fn fetch(&self) -> ProviderResult<IpRanges> {
        debug!(url = %self.url, "fetching IP ranges");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

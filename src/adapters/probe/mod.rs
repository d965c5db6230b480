//! HTTP image dimension probe
//!
//! Implements [`DimensionProbe`] by fetching a bounded prefix of the image
//! over HTTP and sniffing the pixel dimensions out of its header bytes.
//! Timeouts are bounded so a slow image host cannot hang the run; any
//! failure here surfaces as an error and the affected geometry checks
//! fail closed.

mod sniff;

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::blocking::Client;

use crate::core::models::ImageDimensions;
use crate::core::ports::DimensionProbe;

pub use sniff::{SniffError, sniff_dimensions};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// How much of the image body to read at most
///
/// Dimension headers sit near the start of PNG, GIF, and JPEG streams;
/// half a megabyte covers JPEGs with large embedded metadata blocks.
const MAX_PREFIX_BYTES: u64 = 512 * 1024;

/// Dimension probe that fetches image headers over HTTP
#[derive(Debug)]
pub struct HttpDimensionProbe {
    client: Client,
}

impl HttpDimensionProbe {
    /// Build a probe with bounded connect and request timeouts
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("annolint/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Read at most `MAX_PREFIX_BYTES` of the response body
    fn read_prefix(response: reqwest::blocking::Response) -> anyhow::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut reader = response.take(MAX_PREFIX_BYTES);
        reader.read_to_end(&mut bytes).context("Failed to read image bytes")?;
        Ok(bytes)
    }
}

impl DimensionProbe for HttpDimensionProbe {
    fn probe(&self, url: &str) -> anyhow::Result<ImageDimensions> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("image request failed: {url}"))?;

        if !response.status().is_success() {
            bail!("image request rejected: {url}: HTTP {}", response.status().as_u16());
        }

        let bytes = Self::read_prefix(response)?;
        let dims = sniff_dimensions(&bytes)
            .with_context(|| format!("could not sniff image dimensions: {url}"))?;
        Ok(dims)
    }
}

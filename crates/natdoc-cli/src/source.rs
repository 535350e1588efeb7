//! Catalog sources: local JSON files or HTTP URLs.

use core::fmt;
use core::time::Duration;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use natdoc_core::Catalog;
use reqwest::Client;
use tokio::fs as async_fs;
use tracing::{error, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Where a catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON document served over HTTP(S)
    Url(String),
}

impl CatalogSource {
    /// Classifies a location string; anything that is not an HTTP URL is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Reads the raw catalog text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the request fails
    pub async fn fetch(&self, client: &Client) -> Result<String> {
        match self {
            Self::File(path) => async_fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read catalog {}", path.display())),
            Self::Url(url) => {
                let response = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {url}"))?
                    .error_for_status()
                    .with_context(|| format!("Catalog request to {url} was rejected"))?;
                response
                    .text()
                    .await
                    .with_context(|| format!("Failed to read response body from {url}"))
            }
        }
    }

    /// Reads and parses the catalog.
    ///
    /// # Errors
    /// Returns an error if fetching fails or the document is not a catalog
    pub async fn load(&self, client: &Client) -> Result<Catalog> {
        let text = self.fetch(client).await?;
        Catalog::from_json_str(&text).with_context(|| format!("Invalid catalog from {self}"))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(formatter, "{}", path.display()),
            Self::Url(url) => write!(formatter, "{url}"),
        }
    }
}

/// Loads and merges every source in order.
///
/// A source that fails is logged and skipped.
///
/// # Errors
/// Returns an error if no source could be loaded
pub async fn load_catalog(sources: &[CatalogSource]) -> Result<Catalog> {
    if sources.is_empty() {
        bail!("No catalog sources configured");
    }

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("natdoc/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let mut merged: Option<Catalog> = None;
    for source in sources {
        match source.load(&client).await {
            Ok(catalog) => {
                info!(
                    "Loaded {} natives in {} namespaces from {source}",
                    catalog.native_count(),
                    catalog.len()
                );
                match merged.as_mut() {
                    Some(existing) => existing.merge(catalog),
                    None => merged = Some(catalog),
                }
            }
            Err(load_error) => error!("{load_error:#}"),
        }
    }

    merged.context("No catalog could be loaded")
}

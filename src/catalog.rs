//! Catalog
//!
//! Fetches the product list from a static JSON resource and caches it in the
//! key-value store under 1-based position keys, plus the read side used to
//! render listings. A failed load degrades to an empty catalog; nothing is
//! surfaced to the caller beyond a diagnostic log line.

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::store::{KeyValueStore, StoreError};

/// Errors that can occur while loading or reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog resource could not be fetched or its body decoded.
    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A cached entry did not decode as a product record.
    #[error("cached catalog entry is malformed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The key-value store failed underneath the catalog.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One purchasable photo pack, as published in the catalog resource.
///
/// Records are immutable once loaded; a cached copy may disappear at any time
/// if the host clears the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Pack name.
    pub name: String,

    /// Number of photos included in the pack.
    pub photo_quantity: u32,

    /// Per-pack price before quoting adjustments.
    pub partial_price: Decimal,
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pack {}: {} photos at {}",
            self.name, self.photo_quantity, self.partial_price
        )
    }
}

/// Where the catalog comes from.
#[automock]
#[async_trait]
pub trait CatalogSource {
    /// Fetches and decodes the full product list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on any network or decode fault.
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, CatalogError>;
}

/// Catalog source backed by an HTTP resource serving a JSON array.
///
/// No timeout is applied and in-flight requests cannot be cancelled; a hung
/// fetch simply leaves the catalog unpopulated.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    http: Client,
}

impl HttpCatalogSource {
    /// Creates a source reading from the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let records = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(records)
    }
}

/// Loads the catalog into the store.
///
/// Each record is written under its 1-based position (`"1"`, `"2"`, …) in
/// catalog order, overwriting prior content at those keys. Any fault is
/// reported to the diagnostic channel only; the store is left as it was and
/// the catalog is simply absent.
#[tracing::instrument(skip_all)]
pub async fn load_catalog<S>(source: &(impl CatalogSource + Sync), store: &mut S)
where
    S: KeyValueStore,
{
    match populate(source, store).await {
        Ok(count) => info!(count, "catalog loaded"),
        Err(error) => error!(%error, "failed to load catalog"),
    }
}

async fn populate<S>(
    source: &(impl CatalogSource + Sync),
    store: &mut S,
) -> Result<usize, CatalogError>
where
    S: KeyValueStore,
{
    let records = source.fetch_catalog().await?;

    for (position, record) in records.iter().enumerate() {
        let key = (position + 1).to_string();
        let value = serde_json::to_string(record)?;

        store.set(&key, &value)?;
    }

    Ok(records.len())
}

/// Reads one cached catalog record by its 1-based position.
///
/// Returns `None` when nothing is cached at that position. A malformed cached
/// value fails here, lazily, rather than at load time.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the store cannot be read or the cached value
/// does not decode as a product record.
pub fn product<S>(store: &S, position: usize) -> Result<Option<ProductRecord>, CatalogError>
where
    S: KeyValueStore,
{
    let Some(raw) = store.get(&position.to_string())? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&raw)?))
}

/// Reads all cached catalog records, in catalog order.
///
/// Scans upward from position 1 and stops at the first absent key.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the store cannot be read or a cached value
/// does not decode as a product record.
pub fn products<S>(store: &S) -> Result<Vec<ProductRecord>, CatalogError>
where
    S: KeyValueStore,
{
    let mut records = Vec::new();

    for position in 1.. {
        match product(store, position)? {
            Some(record) => records.push(record),
            None => break,
        }
    }

    Ok(records)
}

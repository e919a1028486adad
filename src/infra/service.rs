//! Feed fetching and the hourly catalog cache.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;
use url::Url;

use crate::domain::{resolve_in, PriceCatalog, PriceQuote};
use crate::infra::feeds::{build_catalog, CsFloatFeed, SkinSwapFeed};

const CSFLOAT_PRICES_URL: &str = "https://csfloat.com/api/v1/listings/price-list";
const SKINSWAP_PRICES_URL: &str = "https://api.skinswap.com/v1/items/prices";

/// Catalog TTL: one hour. Marketplace prices move slowly and both payloads
/// are large, so refreshes stay lazy — the first resolution after expiry
/// triggers the rebuild.
pub const CATALOG_TTL: Duration = Duration::from_secs(60 * 60);

/// Per-request timeout; a timed-out fetch counts as a failed build.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("skin-price-resolver/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Default)]
struct CatalogCache {
    catalog: Arc<PriceCatalog>,
    fetched_at: Option<SystemTime>,
}

impl CatalogCache {
    fn if_fresh(&self, ttl: Duration) -> Option<Arc<PriceCatalog>> {
        let fetched_at = self.fetched_at?;
        match fetched_at.elapsed() {
            Ok(elapsed) if elapsed <= ttl => Some(self.catalog.clone()),
            _ => None,
        }
    }

    fn store(&mut self, catalog: Arc<PriceCatalog>) {
        self.catalog = catalog;
        self.fetched_at = Some(SystemTime::now());
    }
}

/// Fetches both marketplace feeds and answers price lookups from an hourly
/// rebuilt in-memory catalog. Owns all of the subsystem's shared state;
/// clones share the HTTP client and the cache.
#[derive(Clone)]
pub struct PriceService {
    http: Client,
    csfloat_url: Url,
    skinswap_url: Url,
    ttl: Duration,
    cache: Arc<Mutex<CatalogCache>>,
    /// Rebuild gate. Callers that find the cache stale queue up here instead
    /// of each firing their own fetch pair.
    rebuild: Arc<Mutex<()>>,
}

impl PriceService {
    pub fn new() -> Result<Self, FeedError> {
        Self::with_urls(CSFLOAT_PRICES_URL, SKINSWAP_PRICES_URL)
    }

    pub fn with_urls(csfloat: &str, skinswap: &str) -> Result<Self, FeedError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            csfloat_url: Url::parse(csfloat)?,
            skinswap_url: Url::parse(skinswap)?,
            ttl: CATALOG_TTL,
            cache: Arc::new(Mutex::new(CatalogCache::default())),
            rebuild: Arc::new(Mutex::new(())),
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Resolves one display name to its marketplace price pair.
    ///
    /// Infallible by design: a failed refresh falls back to the previous
    /// catalog (possibly empty on first run), and an unmatched name is an
    /// ordinary empty quote. Absent pricing is a frequent, expected outcome
    /// for tracked items missing from both feeds.
    pub async fn resolve(&self, name: &str) -> PriceQuote {
        let catalog = self.catalog().await;
        resolve_in(&catalog, name)
    }

    /// Returns the current catalog, rebuilding it first when the cache has
    /// outlived its TTL. At most one rebuild is in flight at a time; callers
    /// arriving during one pick up its result instead of fetching again.
    pub async fn catalog(&self) -> Arc<PriceCatalog> {
        if let Some(catalog) = self.cache.lock().await.if_fresh(self.ttl) {
            return catalog;
        }

        let _gate = self.rebuild.lock().await;
        // A rebuild may have completed while we waited on the gate.
        if let Some(catalog) = self.cache.lock().await.if_fresh(self.ttl) {
            return catalog;
        }

        match self.fetch_feeds().await {
            Ok((csfloat, skinswap)) => {
                let catalog = Arc::new(build_catalog(csfloat, skinswap));
                info!("price catalog rebuilt: {} items", catalog.len());
                let mut cache = self.cache.lock().await;
                cache.store(catalog.clone());
                catalog
            }
            Err(err) => {
                warn!("price feed refresh failed, serving previous catalog: {err}");
                self.cache.lock().await.catalog.clone()
            }
        }
    }

    /// Age of the cached catalog; `None` before the first successful build.
    pub async fn catalog_age(&self) -> Option<Duration> {
        let cache = self.cache.lock().await;
        cache.fetched_at.and_then(|at| at.elapsed().ok())
    }

    async fn fetch_feeds(&self) -> Result<(CsFloatFeed, SkinSwapFeed), FeedError> {
        tokio::try_join!(
            self.fetch_json::<CsFloatFeed>(self.csfloat_url.clone()),
            self.fetch_json::<SkinSwapFeed>(self.skinswap_url.clone()),
        )
    }

    async fn fetch_json<T>(&self, url: Url) -> Result<T, FeedError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

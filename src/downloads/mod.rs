//! Total package downloads for an owner.
//!
//! Pages through the search endpoint until a short or empty page, sums the
//! per-package totals and caches the sum for an hour.

mod cache;
mod source;

pub use cache::{DownloadCache, now_millis};
pub use source::{DownloadError, DownloadSource, NugetSearch};

use crate::config::DownloadsConfig;
use crate::{debug, log};

pub struct DownloadCounter<S> {
    source: S,
    cache: Option<DownloadCache>,
    page_size: usize,
}

impl<S: DownloadSource> DownloadCounter<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            cache: None,
            page_size: page_size.max(1),
        }
    }

    pub fn with_cache(mut self, cache: DownloadCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sum of downloads over every package `owner` publishes.
    ///
    /// A fresh cache entry short-circuits the fetch. Remote failures are
    /// logged and returned; nothing is cached for them.
    pub async fn total_downloads(&self, owner: &str) -> Result<u64, DownloadError> {
        if let Some(cache) = &self.cache
            && let Some(total) = cache.get(owner, now_millis())
        {
            return Ok(total);
        }

        match self.fetch_total(owner).await {
            Ok(total) => {
                if let Some(cache) = &self.cache {
                    cache.set(owner, total, now_millis());
                }
                Ok(total)
            }
            Err(e) => {
                log!("error"; "failed to fetch downloads for {}: {}", owner, e);
                Err(e)
            }
        }
    }

    async fn fetch_total(&self, owner: &str) -> Result<u64, DownloadError> {
        let take = self.page_size;
        let mut skip = 0;
        let mut packages = 0usize;
        let mut total = 0u64;

        loop {
            let page = self.source.search(owner, skip, take).await?;
            debug!("downloads"; "received {} packages (total hits: {})", page.data.len(), page.total_hits);

            if page.data.is_empty() {
                break;
            }

            packages += page.data.len();
            for hit in &page.data {
                debug!("downloads"; "{}: {}", hit.id, hit.downloads());
                total = total.saturating_add(hit.downloads());
            }

            if page.data.len() < take {
                break;
            }
            skip += take;
        }

        debug!("downloads"; "{} packages, {} downloads", packages, total);
        Ok(total)
    }
}

impl DownloadCounter<NugetSearch> {
    /// Counter against the configured endpoint.
    pub fn from_config(
        config: &DownloadsConfig,
        cache: DownloadCache,
    ) -> Result<Self, DownloadError> {
        let source = NugetSearch::new(&config.endpoint)?;
        Ok(Self::new(source, config.page_size).with_cache(cache))
    }
}

pub fn round_down_to_million(n: u64) -> u64 {
    n / 1_000_000 * 1_000_000
}

/// `87_654_321` -> `"87M+"`
pub fn format_millions(n: u64) -> String {
    format!("{}M+", round_down_to_million(n) / 1_000_000)
}

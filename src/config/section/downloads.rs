//! `[downloads]` section configuration.
//!
//! ```toml
//! [downloads]
//! owner = "PrismLibrary"
//! endpoint = "https://azuresearch-usnc.nuget.org/query"
//! page_size = 30
//! cache_ttl = 3600                          # seconds
//! cache_file = ".docref/cache/downloads.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Package owner whose downloads are summed.
    pub owner: String,
    /// Search endpoint queried with `q=owner:<owner>&skip=&take=`.
    pub endpoint: String,
    pub page_size: usize,
    /// Cache lifetime in seconds.
    pub cache_ttl: u64,
    /// Cache file (relative to the project root).
    pub cache_file: PathBuf,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            owner: "PrismLibrary".to_string(),
            endpoint: "https://azuresearch-usnc.nuget.org/query".to_string(),
            page_size: 30,
            cache_ttl: 60 * 60,
            cache_file: PathBuf::from(".docref/cache/downloads.json"),
        }
    }
}

impl DownloadsConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_size == 0 {
            diag.error("downloads.page_size", "must be greater than 0");
        }
        if url::Url::parse(&self.endpoint).is_err() {
            diag.error("downloads.endpoint", format!("`{}` is not a valid URL", self.endpoint));
        }
        if self.owner.trim().is_empty() {
            diag.error("downloads.owner", "must not be empty");
        }
    }
}

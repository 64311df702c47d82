//! On-disk cache of download totals, one entry per owner.
//!
//! ```json
//! {
//!   "prismlibrary": { "totalDownloads": 87654321, "timestamp": 1760000000000 }
//! }
//! ```
//!
//! Read and write failures are logged and otherwise ignored: a broken cache
//! only costs a fresh fetch.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{debug, log};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedTotal {
    pub total_downloads: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

type Entries = BTreeMap<String, CachedTotal>;

pub struct DownloadCache {
    path: PathBuf,
    ttl: Duration,
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

fn cache_key(owner: &str) -> String {
    owner.to_lowercase()
}

impl DownloadCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached total for `owner` if younger than the TTL. Expired entries are evicted.
    pub fn get(&self, owner: &str, now: u64) -> Option<u64> {
        let mut entries = self.read();
        let key = cache_key(owner);
        let entry = *entries.get(&key)?;

        let ttl = u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX);
        if now.saturating_sub(entry.timestamp) < ttl {
            debug!("downloads"; "using cached total for {}: {}", owner, entry.total_downloads);
            return Some(entry.total_downloads);
        }

        entries.remove(&key);
        self.write(&entries);
        None
    }

    pub fn set(&self, owner: &str, total_downloads: u64, now: u64) {
        let mut entries = self.read();
        entries.insert(
            cache_key(owner),
            CachedTotal {
                total_downloads,
                timestamp: now,
            },
        );
        self.write(&entries);
        debug!("downloads"; "cached total for {}: {}", owner, total_downloads);
    }

    /// Drop the entry for `owner`. Returns whether one existed.
    pub fn clear(&self, owner: &str) -> bool {
        let mut entries = self.read();
        let removed = entries.remove(&cache_key(owner)).is_some();
        if removed {
            self.write(&entries);
        }
        removed
    }

    /// Drop every entry.
    pub fn clear_all(&self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            log!("warning"; "failed to remove {}: {}", self.path.display(), e);
        }
    }

    fn read(&self) -> Entries {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                log!("warning"; "failed to read {}: {}", self.path.display(), e);
                return Entries::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log!("warning"; "ignoring corrupt cache {}: {}", self.path.display(), e);
            Entries::new()
        })
    }

    fn write(&self, entries: &Entries) {
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(entries)?;
            fs::write(&self.path, json)
        })();

        if let Err(e) = result {
            log!("warning"; "failed to write {}: {}", self.path.display(), e);
        }
    }
}

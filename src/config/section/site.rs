//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! route_prefix = "/docs"   # route every docs page is served under
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Route prefix of the docs plugin, prepended to every canonical path.
    pub route_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/docs".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let prefix = &self.route_prefix;
        if !prefix.starts_with('/') {
            diag.error_with_hint(
                "site.route_prefix",
                format!("`{prefix}` must start with `/`"),
                "e.g. route_prefix = \"/docs\"",
            );
        } else if prefix.len() > 1 && prefix.ends_with('/') {
            diag.error("site.route_prefix", format!("`{prefix}` must not end with `/`"));
        }
    }
}

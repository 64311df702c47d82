//! Link target transforms.
//!
//! Each transform is a pure function of (link target, [`XrefContext`]); the
//! pipeline applies them in order to every link node independently.
//!
//! | Transform         | Matches                        | Result                       |
//! |-------------------|--------------------------------|------------------------------|
//! | [`XrefResolver`]  | `xref:<uid>`                   | mapped route, or unresolved  |
//! | [`IndexStripper`] | `<prefix>/.../index`           | route without `/index`       |

mod strip_index;
mod xref;

pub use strip_index::IndexStripper;
pub use xref::XrefResolver;

use crate::config::DocsConfig;
use crate::xref::{UidMapping, strip_index_suffix};

/// What a transform decided for one link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Not handled by this transform.
    Keep,
    /// Replace the target.
    Rewrite(String),
    /// Reference with no mapping entry; the target is left as written.
    Unresolved(String),
}

/// A rewrite applied to link targets.
pub trait LinkTransform {
    fn name(&self) -> &'static str;

    fn transform(&self, dest: &str) -> LinkOutcome;
}

/// Everything the link transforms need, built once per process.
#[derive(Debug, Clone)]
pub struct XrefContext {
    pub mapping: UidMapping,
    pub scheme: String,
    pub route_prefix: String,
}

impl XrefContext {
    pub fn new(mapping: UidMapping, config: &DocsConfig) -> Self {
        Self {
            mapping,
            scheme: config.xref.scheme.clone(),
            route_prefix: config.site.route_prefix.clone(),
        }
    }

    /// Load the mapping artifact named by the config (empty on failure).
    pub fn load(config: &DocsConfig) -> Self {
        Self::new(UidMapping::load_or_empty(&config.mapping_path()), config)
    }

    /// Canonical route for `uid`, with any stale `/index` suffix removed.
    pub fn resolve_uid(&self, uid: &str) -> Option<&str> {
        self.mapping.get(uid).map(strip_index_suffix)
    }
}

#[cfg(test)]
pub(crate) fn test_context(entries: &[(&str, &str)]) -> XrefContext {
    let mapping = entries
        .iter()
        .map(|(uid, route)| ((*uid).to_string(), (*route).to_string()))
        .collect();
    XrefContext::new(mapping, &DocsConfig::default())
}

//! `[xref]` section configuration.
//!
//! ```toml
//! [xref]
//! scheme = "xref:"              # link prefix rewritten by the resolver
//! uid_field = "uid"             # header field holding the identifier
//! mapping = "uid-mapping.json"  # artifact written by `docref map`
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct XrefConfig {
    pub scheme: String,
    pub uid_field: String,
    /// Mapping artifact path (relative to the project root).
    pub mapping: PathBuf,
}

impl Default for XrefConfig {
    fn default() -> Self {
        Self {
            scheme: "xref:".to_string(),
            uid_field: "uid".to_string(),
            mapping: PathBuf::from("uid-mapping.json"),
        }
    }
}

impl XrefConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.scheme.len() < 2 || !self.scheme.ends_with(':') {
            diag.error_with_hint(
                "xref.scheme",
                format!("`{}` is not a link scheme", self.scheme),
                "a scheme ends with `:`, e.g. \"xref:\"",
            );
        }
        if self.uid_field.trim().is_empty() || self.uid_field.contains(':') {
            diag.error("xref.uid_field", format!("`{}` is not a valid header field", self.uid_field));
        }
    }
}

//! `[verify]` section configuration.
//!
//! ```toml
//! [verify]
//! extension = "md"   # canonical extension relative links must carry
//! strict = false     # exit non-zero when errors are found
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub extension: String,
    /// Report-only by default.
    pub strict: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            strict: false,
        }
    }
}

impl VerifyConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extension.is_empty() || self.extension.contains(['.', '/']) {
            diag.error_with_hint(
                "verify.extension",
                format!("`{}` is not a file extension", self.extension),
                "e.g. extension = \"md\"",
            );
        }
    }
}

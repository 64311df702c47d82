//! `[content]` section configuration.
//!
//! ```toml
//! [content]
//! docs = "docs"                       # live docs tree
//! versioned = "versioned_docs"        # archived snapshots, verified separately
//! extensions = ["md", "mdx"]          # documents scanned for uids
//! exclude = ["tutorial-basics/", "tutorial-extras/"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Live docs tree (relative to the project root).
    pub docs: PathBuf,

    /// Versioned snapshot tree (relative to the project root).
    pub versioned: PathBuf,

    /// Document extensions, without the dot.
    pub extensions: Vec<String>,

    /// Docs-relative path prefixes left out of the uid index.
    pub exclude: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            docs: PathBuf::from("docs"),
            versioned: PathBuf::from("versioned_docs"),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            exclude: vec!["tutorial-basics/".to_string(), "tutorial-extras/".to_string()],
        }
    }
}

impl ContentConfig {
    /// Whether `path` has one of the document extensions.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }

    /// Whether a docs-relative, slash-separated path is excluded from the index.
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        self.exclude.iter().any(|prefix| rel_path.starts_with(prefix.as_str()))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error("content.extensions", "at least one document extension is required");
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.starts_with('.')) {
            diag.error_with_hint(
                "content.extensions",
                format!("`{ext}` should not start with a dot"),
                format!("use \"{}\"", ext.trim_start_matches('.')),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_document() {
        let content = ContentConfig::default();
        assert!(content.is_document(Path::new("docs/intro.md")));
        assert!(content.is_document(Path::new("docs/page.mdx")));
        assert!(!content.is_document(Path::new("docs/logo.png")));
        assert!(!content.is_document(Path::new("docs/README")));
    }

    #[test]
    fn test_is_excluded() {
        let content = ContentConfig::default();
        assert!(content.is_excluded("tutorial-basics/create-a-page.md"));
        assert!(content.is_excluded("tutorial-extras/deep/nested.md"));
        assert!(!content.is_excluded("navigation/basics.md"));
        assert!(!content.is_excluded("tutorial-basics.md"));
    }

    #[test]
    fn test_validate_extensions() {
        let mut diag = ConfigDiagnostics::new();
        ContentConfig {
            extensions: vec![".md".to_string()],
            ..Default::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
    }
}

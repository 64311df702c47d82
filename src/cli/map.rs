//! `docref map`: rebuild the uid mapping artifact.

use anyhow::Result;

use crate::config::DocsConfig;
use crate::log;
use crate::xref::{IndexBuilder, UidMapping, write_mapping};

/// Scan the docs tree and overwrite the mapping artifact.
pub fn build_mapping(config: &DocsConfig) -> Result<UidMapping> {
    let docs_dir = config.docs_dir();
    let output = config.mapping_path();

    log!("map"; "project root: {}", config.get_root().display());
    log!("map"; "docs root: {}", docs_dir.display());

    let mapping = IndexBuilder::new(config)?.build(&docs_dir)?;
    write_mapping(&mapping, &output)?;

    log!("map"; "wrote {}", output.display());
    log!("map"; "total uids mapped: {}", mapping.len());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_mapping_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs/commands");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("index.md"), "---\nuid: commands.overview\n---\n").unwrap();

        let config = DocsConfig {
            root: dir.path().to_path_buf(),
            ..DocsConfig::default()
        };
        let mapping = build_mapping(&config).unwrap();
        assert_eq!(mapping.get("commands.overview"), Some("/docs/commands"));

        let written = fs::read_to_string(dir.path().join("uid-mapping.json")).unwrap();
        assert_eq!(written, "{\n  \"commands.overview\": \"/docs/commands\"\n}\n");
    }

    #[test]
    fn test_missing_docs_root_fails() {
        let dir = TempDir::new().unwrap();
        let config = DocsConfig {
            root: dir.path().to_path_buf(),
            ..DocsConfig::default()
        };
        let err = build_mapping(&config).unwrap_err();
        assert!(err.to_string().contains("docs directory not found"));
        assert!(!dir.path().join("uid-mapping.json").exists());
    }
}

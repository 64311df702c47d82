//! Reference index builder: docs tree -> [`UidMapping`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use super::{UidExtractor, UidMapping, route_for_file};
use crate::config::{ContentConfig, DocsConfig};
use crate::log;
use crate::utils::path::relative_slash;
use crate::utils::plural_count;

/// Scans a docs tree for uid headers.
pub struct IndexBuilder<'a> {
    content: &'a ContentConfig,
    route_prefix: &'a str,
    extractor: UidExtractor,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(config: &'a DocsConfig) -> Result<Self> {
        let extractor = UidExtractor::new(&config.xref.uid_field)
            .with_context(|| format!("invalid uid field `{}`", config.xref.uid_field))?;
        Ok(Self {
            content: &config.content,
            route_prefix: &config.site.route_prefix,
            extractor,
        })
    }

    /// All documents under `root`, sorted by path.
    pub fn collect_documents(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<_> = WalkDir::new(root)
            .sort(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|p| self.content.is_document(p))
            .collect();
        files.sort();
        files
    }

    /// Build the mapping for the docs tree at `root`.
    ///
    /// Fails only if `root` is not a directory. Documents under an excluded
    /// prefix never contribute; unreadable documents are logged and skipped.
    pub fn build(&self, root: &Path) -> Result<UidMapping> {
        if !root.is_dir() {
            bail!("docs directory not found: {}", root.display());
        }

        let files = self.collect_documents(root);
        log!("map"; "scanning {}", plural_count(files.len(), "document"));

        let mut mapping = UidMapping::new();
        for file in &files {
            let rel = relative_slash(file, root);
            if self.content.is_excluded(&rel) {
                continue;
            }

            let content = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    log!("warning"; "skipping {}: {}", rel, e);
                    continue;
                }
            };

            if let Some(uid) = self.extractor.extract(&content) {
                let route = route_for_file(file, root, self.route_prefix);
                log!("map"; "found uid: {} -> {}", uid, route);
                if let Some(previous) = mapping.insert(uid.clone(), route) {
                    log!("warning"; "uid `{}` declared more than once, replacing {}", uid, previous);
                }
            }
        }

        Ok(mapping)
    }
}

/// Write the complete mapping to `path`, replacing any previous artifact.
pub fn write_mapping(mapping: &UidMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = mapping.to_json()?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn build(root: &Path) -> UidMapping {
        let config = DocsConfig::default();
        IndexBuilder::new(&config).unwrap().build(root).unwrap()
    }

    #[test]
    fn test_build_mapping() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        write(&docs, "navigation/basics.md", "---\nuid: navigation.basics\n---\n# Basics\n");
        write(&docs, "commands/index.md", "---\ntitle: Commands\nuid: commands.overview\n---\n");
        write(&docs, "intro.mdx", "---\nuid: intro\n---\n");
        write(&docs, "no-header.md", "# Nothing here\n");
        write(&docs, "no-uid.md", "---\ntitle: Untitled\n---\n");
        write(&docs, "notes.txt", "---\nuid: not.a.document\n---\n");

        let mapping = build(&docs);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("navigation.basics"), Some("/docs/navigation/basics"));
        assert_eq!(mapping.get("commands.overview"), Some("/docs/commands"));
        assert_eq!(mapping.get("intro"), Some("/docs/intro"));
        assert_eq!(mapping.get("not.a.document"), None);
    }

    #[test]
    fn test_excluded_prefixes_never_contribute() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        write(&docs, "tutorial-basics/create-a-page.md", "---\nuid: tutorial.page\n---\n");
        write(&docs, "tutorial-extras/nested/deep.md", "---\nuid: tutorial.deep\n---\n");
        write(&docs, "tutorial-basics.md", "---\nuid: kept\n---\n");

        let mapping = build(&docs);
        assert_eq!(mapping.get("tutorial.page"), None);
        assert_eq!(mapping.get("tutorial.deep"), None);
        assert_eq!(mapping.get("kept"), Some("/docs/tutorial-basics"));
    }

    #[test]
    fn test_routes_are_canonical() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        write(&docs, "index.md", "---\nuid: home\n---\n");
        write(&docs, "a/b/index.mdx", "---\nuid: ab\n---\n");

        let mapping = build(&docs);
        for (_, route) in mapping.iter() {
            assert!(route.starts_with("/docs"));
            assert!(!route.ends_with("/index"));
        }
        assert_eq!(mapping.get("home"), Some("/docs"));
        assert_eq!(mapping.get("ab"), Some("/docs/a/b"));
    }

    #[test]
    fn test_duplicate_uid_last_in_path_order_wins() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        write(&docs, "a.md", "---\nuid: dup\n---\n");
        write(&docs, "b.md", "---\nuid: dup\n---\n");

        assert_eq!(build(&docs).get("dup"), Some("/docs/b"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = DocsConfig::default();
        let err = IndexBuilder::new(&config)
            .unwrap()
            .build(&dir.path().join("docs"))
            .unwrap_err();
        assert!(err.to_string().contains("docs directory not found"));
    }

    #[test]
    fn test_write_mapping_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/uid-mapping.json");

        let mut first = UidMapping::new();
        first.insert("old", "/docs/old");
        write_mapping(&first, &path).unwrap();

        let mut second = UidMapping::new();
        second.insert("new", "/docs/new");
        write_mapping(&second, &path).unwrap();

        let loaded = UidMapping::try_load(&path).unwrap();
        assert_eq!(loaded, second);
    }
}

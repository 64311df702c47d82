//! `docref render`: Markdown -> HTML through the link pipeline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use crate::config::DocsConfig;
use crate::pipeline::{RenderPipeline, XrefContext};
use crate::utils::path::{normalize_path, resolve_path, to_slash};
use crate::utils::plural_count;
use crate::{debug, log};

/// Collect documents from CLI paths; no paths means the whole docs tree.
pub fn collect_documents(paths: &[PathBuf], config: &DocsConfig) -> Result<Vec<PathBuf>> {
    let docs_dir = config.docs_dir();
    if paths.is_empty() {
        if !docs_dir.is_dir() {
            bail!("docs directory not found: {}", docs_dir.display());
        }
        return Ok(walk_documents(&docs_dir, config));
    }

    let mut files = Vec::new();
    for path in paths {
        let resolved = resolve_path(path, &docs_dir);
        if resolved.is_file() {
            if !config.content.is_document(&resolved) {
                bail!("Not a markdown document: {}", path.display());
            }
            files.push(resolved);
        } else if resolved.is_dir() {
            files.extend(walk_documents(&resolved, config));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                docs_dir.join(path).display()
            );
        }
    }
    Ok(files)
}

fn walk_documents(dir: &Path, config: &DocsConfig) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| config.content.is_document(p))
        .collect()
}

/// `<output>/<docs-relative path>.html`; files outside the docs tree keep
/// only their file name.
pub fn output_path(file: &Path, docs_dir: &Path, output: &Path) -> PathBuf {
    let rel = file
        .strip_prefix(docs_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| file.file_name().map(PathBuf::from).unwrap_or_default());
    output.join(rel).with_extension("html")
}

/// Render the requested documents.
///
/// A single document without `--output` goes to stdout.
pub fn render_documents(
    paths: &[PathBuf],
    output: Option<&Path>,
    config: &DocsConfig,
) -> Result<()> {
    let files = collect_documents(paths, config)?;
    if files.is_empty() {
        log!("render"; "no documents found");
        return Ok(());
    }

    let ctx = XrefContext::load(config);
    let pipeline = RenderPipeline::new(&ctx);

    let Some(output) = output else {
        let [file] = files.as_slice() else {
            bail!(
                "--output is required when rendering {}",
                plural_count(files.len(), "document")
            );
        };
        let markdown =
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
        let rendered = pipeline.render(&markdown);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.html.as_bytes())?;
        return Ok(());
    };

    let output = config.root_join(output);
    let docs_dir = normalize_path(&config.docs_dir());
    let mut unresolved = 0;

    for file in &files {
        let markdown =
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
        let rendered = pipeline.render(&markdown);
        unresolved += rendered.unresolved.len();

        let dest = output_path(&normalize_path(file), &docs_dir, &output);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&dest, rendered.html)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        debug!("render"; "{} -> {}", to_slash(file), to_slash(&dest));
    }

    log!("render"; "rendered {} to {}", plural_count(files.len(), "document"), output.display());
    if unresolved > 0 {
        log!("warning"; "{}", plural_count(unresolved, "unresolved xref link"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> (TempDir, DocsConfig) {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("navigation")).unwrap();
        fs::write(
            docs.join("navigation/basics.md"),
            "---\nuid: navigation.basics\n---\n# Basics\n",
        )
        .unwrap();
        fs::write(docs.join("intro.md"), "See [Basics](xref:navigation.basics).\n").unwrap();
        fs::write(docs.join("logo.png"), "").unwrap();
        fs::write(
            dir.path().join("uid-mapping.json"),
            "{\n  \"navigation.basics\": \"/docs/navigation/basics\"\n}\n",
        )
        .unwrap();

        let config = DocsConfig {
            root: dir.path().to_path_buf(),
            ..DocsConfig::default()
        };
        (dir, config)
    }

    fn relative(file: &Path, root: &Path) -> String {
        crate::utils::path::relative_slash(file, root)
    }

    #[test]
    fn test_collect_whole_tree() {
        let (_dir, config) = project();
        let files = collect_documents(&[], &config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| relative(f, &config.docs_dir()))
            .collect();
        assert_eq!(names, vec!["intro.md", "navigation/basics.md"]);
    }

    #[test]
    fn test_collect_rejects_missing_path() {
        let (_dir, config) = project();
        let err = collect_documents(&[PathBuf::from("nope.md")], &config).unwrap_err();
        assert!(err.to_string().starts_with("Path not found: nope.md"));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(
                Path::new("/site/docs/navigation/basics.md"),
                Path::new("/site/docs"),
                Path::new("/out")
            ),
            PathBuf::from("/out/navigation/basics.html")
        );
        assert_eq!(
            output_path(Path::new("/tmp/page.md"), Path::new("/site/docs"), Path::new("/out")),
            PathBuf::from("/out/page.html")
        );
    }

    #[test]
    fn test_render_to_directory() {
        let (dir, config) = project();
        let out = dir.path().join("out");
        render_documents(&[], Some(&out), &config).unwrap();

        let html = fs::read_to_string(out.join("intro.html")).unwrap();
        assert!(html.contains(r#"<a href="/docs/navigation/basics">Basics</a>"#));
        assert!(out.join("navigation/basics.html").exists());
    }

    #[test]
    fn test_render_with_built_mapping() {
        let (dir, config) = project();
        fs::remove_file(config.mapping_path()).unwrap();

        let mapping = crate::cli::map::build_mapping(&config).unwrap();
        assert_eq!(mapping.get("navigation.basics"), Some("/docs/navigation/basics"));
        assert!(config.mapping_path().exists());

        let out = dir.path().join("out");
        render_documents(&[], Some(&out), &config).unwrap();

        let html = fs::read_to_string(out.join("intro.html")).unwrap();
        assert!(html.contains(r#"<a href="/docs/navigation/basics">Basics</a>"#));
    }

    #[test]
    fn test_many_documents_need_output() {
        let (_dir, config) = project();
        assert!(render_documents(&[], None, &config).is_err());
    }
}

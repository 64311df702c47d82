//! Link integrity verification for documentation trees.
//!
//! Each tree (`docs/`, `versioned_docs/`) is checked against its own file
//! set. Links are classified syntactically first, then relative targets are
//! resolved lexically:
//!
//! | Target                    | Result                                      |
//! |---------------------------|---------------------------------------------|
//! | `https:` / `xref:` / `#x` | skipped                                     |
//! | `/docs/b`                 | error: absolute path                        |
//! | `./b.md` (exists)         | valid                                       |
//! | `./b` (`b.md` exists)     | warning: missing extension, fix `./b.md`    |
//! | `./b/` (`b.md` exists)    | warning: missing extension, fix `./b.md`    |
//! | `./dir` (`dir/index.md`)  | warning: directory link, fix `./dir/index.md` |
//! | `./missing`               | error: file not found: `missing.md`         |

mod extract;
mod resolve;

pub use extract::extract_links;
pub use resolve::{Resolution, normalize_relative, resolve_in};

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use percent_encoding::percent_decode_str;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::config::VerifyConfig;
use crate::core::LinkKind;
use crate::log;
use crate::logger::ProgressLine;
use crate::utils::path::relative_slash;
use crate::utils::path::route::split_target;

// ============================================================================
// Issue types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    AbsolutePath,
    NotFound,
    MissingExtension,
    DirectoryLink,
    /// Resolves as written but does not spell out the extension.
    ExtensionRecommended,
}

impl IssueKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::AbsolutePath | Self::NotFound => Severity::Error,
            Self::MissingExtension | Self::DirectoryLink | Self::ExtensionRecommended => {
                Severity::Warning
            }
        }
    }
}

/// One problem with one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkIssue {
    pub line: usize,
    pub target: String,
    pub text: String,
    pub kind: IssueKind,
    pub message: String,
    pub fix: String,
}

/// Issues found in a single document, split by severity.
#[derive(Debug, Clone, Default)]
pub struct FileIssues {
    /// Tree-root relative path.
    pub file: String,
    pub errors: Vec<LinkIssue>,
    pub warnings: Vec<LinkIssue>,
}

impl FileIssues {
    fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            ..Self::default()
        }
    }

    fn push(&mut self, issue: LinkIssue) {
        match issue.kind.severity() {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

// ============================================================================
// Tree
// ============================================================================

/// A documentation tree and the documents it contains.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Report label, e.g. `docs` or `versioned_docs`.
    pub label: String,
    pub root: PathBuf,
    /// Tree-root relative paths with forward slashes.
    pub files: FxHashSet<String>,
}

impl Tree {
    /// Collect every `.<ext>` file under `root`. `None` if `root` is not a directory.
    pub fn scan(label: impl Into<String>, root: &Path, ext: &str) -> Option<Self> {
        if !root.is_dir() {
            return None;
        }

        let files = WalkDir::new(root)
            .sort(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == ext))
            .map(|path| relative_slash(&path, root))
            .collect();

        Some(Self {
            label: label.into(),
            root: root.to_path_buf(),
            files,
        })
    }

    /// Build a tree from known paths, without touching the filesystem.
    #[cfg(test)]
    pub fn from_files<I, S>(label: impl Into<String>, root: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            root: root.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Files in stable order.
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.files.iter().map(String::as_str).collect();
        files.sort_unstable();
        files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// ============================================================================
// Verifier
// ============================================================================

pub struct Verifier {
    extension: String,
    dot_ext: String,
}

impl Verifier {
    pub fn new(config: &VerifyConfig) -> Self {
        Self::with_extension(&config.extension)
    }

    pub fn with_extension(ext: &str) -> Self {
        Self {
            extension: ext.to_string(),
            dot_ext: format!(".{ext}"),
        }
    }

    /// Verify every document of `tree`. Files without issues are dropped.
    pub fn verify_tree(&self, tree: &Tree, progress: Option<&ProgressLine>) -> Vec<FileIssues> {
        tree.sorted_files()
            .into_par_iter()
            .filter_map(|rel| {
                let issues = self.verify_file(tree, rel);
                if let Some(progress) = progress {
                    progress.inc(&tree.label);
                }
                (!issues.is_empty()).then_some(issues)
            })
            .collect()
    }

    /// Verify one document. An unreadable file is logged and yields no issues.
    pub fn verify_file(&self, tree: &Tree, rel: &str) -> FileIssues {
        let path = tree.root.join(rel);
        match fs::read_to_string(&path) {
            Ok(content) => self.verify_content(tree, rel, &content),
            Err(err) => {
                log!("warning"; "failed to read {}: {}", path.display(), err);
                FileIssues::new(rel)
            }
        }
    }

    /// Verify the links of `content`, as if it were `rel` inside `tree`.
    pub fn verify_content(&self, tree: &Tree, rel: &str, content: &str) -> FileIssues {
        let mut issues = FileIssues::new(rel);
        for link in extract_links(content) {
            if let Some((kind, message, fix)) = self.classify_link(tree, rel, &link.target) {
                issues.push(LinkIssue {
                    line: link.line,
                    target: link.target,
                    text: link.text,
                    kind,
                    message,
                    fix,
                });
            }
        }
        issues
    }

    /// Check one target written in `source`. `None` means nothing to report.
    pub fn classify_link(
        &self,
        tree: &Tree,
        source: &str,
        target: &str,
    ) -> Option<(IssueKind, String, String)> {
        let written = match LinkKind::parse(target) {
            LinkKind::External(_) | LinkKind::Fragment(_) => return None,
            LinkKind::Absolute(_) => {
                return Some((
                    IssueKind::AbsolutePath,
                    "absolute path, will break in versioned docs".to_string(),
                    "convert to a relative path".to_string(),
                ));
            }
            LinkKind::Relative(path) => path,
        };

        let (path, suffix) = split_target(written);
        // `?tab=1` alone points back at the current page
        if path.is_empty() {
            return None;
        }

        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let normalized = normalize_relative(source, &decoded);
        let ext = &self.extension;
        // `./b/` and `./b.md/` name the file `b.md`, never `b/.md`
        let bare = path.trim_end_matches('/');

        match resolve_in(&tree.files, &normalized, ext) {
            Resolution::Direct(_) => {
                let fixed = if decoded.trim_end_matches('/').ends_with(&self.dot_ext) {
                    bare.to_string()
                } else {
                    format!("{bare}{}", self.dot_ext)
                };
                (fixed != path).then(|| {
                    (
                        IssueKind::ExtensionRecommended,
                        format!("link should include .{ext} extension"),
                        format!("{fixed}{suffix}"),
                    )
                })
            }
            Resolution::WithExtension(_) => Some((
                IssueKind::MissingExtension,
                format!("missing .{ext} extension"),
                format!("{bare}{}{suffix}", self.dot_ext),
            )),
            Resolution::DirectoryIndex(_) => {
                let dir = if bare.is_empty() { "." } else { bare };
                Some((
                    IssueKind::DirectoryLink,
                    format!("directory link should point to index.{ext}"),
                    format!("{dir}/index{}{suffix}", self.dot_ext),
                ))
            }
            Resolution::NotFound(resolved) => Some((
                IssueKind::NotFound,
                format!("file not found: {resolved}"),
                "update the link to point to an existing file".to_string(),
            )),
        }
    }
}

// ============================================================================
// tests
// ============================================================================

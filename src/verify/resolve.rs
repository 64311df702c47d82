//! Lexical resolution of relative targets against a tree's file set.

use rustc_hash::FxHashSet;

/// Where a cleaned target landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path is a file as written.
    Direct(String),
    /// The path names a file once the extension is appended.
    WithExtension(String),
    /// The path names a directory holding `index.<ext>`.
    DirectoryIndex(String),
    /// Nothing matched; the path with the extension appended.
    NotFound(String),
}

/// Join `target` to the directory of `source` and fold `.` / `..`.
///
/// Both are tree-root relative with forward slashes. Parent steps past the
/// root are kept as leading `..` so the path can never match a tree file.
/// The tree root itself is the empty string.
pub fn normalize_relative(source: &str, target: &str) -> String {
    let source_dir = source.rsplit_once('/').map_or("", |(dir, _)| dir);

    let mut parts: Vec<&str> = Vec::new();
    for segment in source_dir.split('/').chain(target.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    parts.join("/")
}

/// Look `path` up in `files`, trying the extension and then a directory index.
pub fn resolve_in(files: &FxHashSet<String>, path: &str, ext: &str) -> Resolution {
    let dot_ext = format!(".{ext}");

    if !path.is_empty() && files.contains(path) {
        return Resolution::Direct(path.to_string());
    }

    if !path.is_empty() && !path.ends_with(&dot_ext) {
        let with_ext = format!("{path}{dot_ext}");
        if files.contains(&with_ext) {
            return Resolution::WithExtension(with_ext);
        }
    }

    let index = if path.is_empty() {
        format!("index{dot_ext}")
    } else {
        format!("{path}/index{dot_ext}")
    };
    if files.contains(&index) {
        return Resolution::DirectoryIndex(index);
    }

    if path.ends_with(&dot_ext) {
        Resolution::NotFound(path.to_string())
    } else if path.is_empty() {
        Resolution::NotFound(index)
    } else {
        Resolution::NotFound(format!("{path}{dot_ext}"))
    }
}

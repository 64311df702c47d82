//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form of a user-supplied path
//! - `resolve_path` - cwd-relative first, then relative to a fallback directory
//! - `to_slash` / `relative_slash` - forward-slash strings for routes and report keys

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falls back to joining with the cwd.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path that may be relative to cwd or to `fallback_dir`.
///
/// `docref render navigation/basics.md` works from the project root and
/// from inside the docs directory alike.
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}

/// Join the normal components of `path` with `/`.
///
/// Root, prefix and `.` components are dropped, so the result is stable
/// across platforms.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Normal(s) => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(&s.to_string_lossy());
            }
            Component::ParentDir => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str("..");
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

/// `file` relative to `root`, forward slashes. Falls back to the full path.
pub fn relative_slash(file: &Path, root: &Path) -> String {
    to_slash(file.strip_prefix(root).unwrap_or(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.md"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_fallback() {
        let resolved = resolve_path(Path::new("nonexistent/page.md"), Path::new("/docs-root"));
        assert_eq!(resolved, PathBuf::from("/docs-root/nonexistent/page.md"));
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("navigation/basics.md")), "navigation/basics.md");
        assert_eq!(to_slash(Path::new("./a/b")), "a/b");
        assert_eq!(to_slash(Path::new("../a")), "../a");
        assert_eq!(to_slash(Path::new("")), "");
    }

    #[test]
    fn test_relative_slash() {
        let root = Path::new("/site/docs");
        assert_eq!(
            relative_slash(Path::new("/site/docs/commands/index.md"), root),
            "commands/index.md"
        );
        assert_eq!(relative_slash(Path::new("other/x.md"), root), "other/x.md");
    }
}

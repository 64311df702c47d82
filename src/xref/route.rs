//! Canonical routes for documents.

use std::path::Path;

use crate::utils::path::to_slash;

/// Remove trailing `/index` and `/index/` segments until none remain.
///
/// Shared by the index builder, the xref resolver and the index stripper so
/// all three agree on what a canonical route looks like. Idempotent; a route
/// that would become empty is `/`.
///
/// ```ignore
/// assert_eq!(strip_index_suffix("/docs/commands/index"), "/docs/commands");
/// assert_eq!(strip_index_suffix("/docs/a/index/index/"), "/docs/a");
/// ```
pub fn strip_index_suffix(route: &str) -> &str {
    let mut route = route;
    loop {
        let stripped = route
            .strip_suffix("/index/")
            .or_else(|| route.strip_suffix("/index"));
        match stripped {
            Some("") => return "/",
            Some(rest) => route = rest,
            None => return route,
        }
    }
}

/// Route a document is served at.
///
/// Root-relative path without extension, forward slashes, under `prefix`,
/// index suffix stripped: `docs/commands/index.md` -> `/docs/commands`.
pub fn route_for_file(file: &Path, root: &Path, prefix: &str) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file).with_extension("");
    let route = format!("{}/{}", prefix.trim_end_matches('/'), to_slash(&rel));
    strip_index_suffix(&route).to_string()
}

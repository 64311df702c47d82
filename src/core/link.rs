//! Syntactic link classification.

use crate::utils::path::route::is_external_link;

/// What a Markdown link target looks like, before any file lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Target with a URL scheme (`https://`, `mailto:`, `xref:` ...).
    External(&'a str),
    /// Anchor on the current page (`#section`, `./#section`). Value has no `#`.
    Fragment(&'a str),
    /// Site-root path (`/docs/intro`). Breaks once the tree is archived under
    /// another prefix.
    Absolute(&'a str),
    /// Path relative to the linking document (`./basics.md`, `../intro`).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Classify a raw link target.
    #[inline]
    pub fn parse(target: &'a str) -> Self {
        if is_external_link(target) {
            Self::External(target)
        } else if let Some(anchor) = target.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = target.strip_prefix("./#") {
            Self::Fragment(anchor)
        } else if target.starts_with('/') {
            Self::Absolute(target)
        } else {
            Self::Relative(target)
        }
    }
}

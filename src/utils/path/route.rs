//! Link target helpers.
//!
//! - Scheme detection (external vs. internal)
//! - Splitting a target into path and `#fragment` / `?query` suffix

/// Check if a link has a URL scheme (`https:`, `mailto:`, `xref:` ...).
///
/// A valid scheme has at least one character before the colon and only
/// contains ASCII alphanumerics or `+`, `-`, `.`.
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("xref:navigation.basics"));
/// assert!(!is_external_link("./basics.md"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a target into its path and the `#fragment` / `?query` suffix.
///
/// The suffix keeps its leading `#` or `?` so it can be re-attached verbatim.
///
/// # Examples
/// ```ignore
/// assert_eq!(split_target("./b.md#setup"), ("./b.md", "#setup"));
/// assert_eq!(split_target("./b?tab=1#x"), ("./b", "?tab=1#x"));
/// assert_eq!(split_target("./b"), ("./b", ""));
/// ```
#[inline]
pub fn split_target(target: &str) -> (&str, &str) {
    match target.find(['#', '?']) {
        Some(pos) => target.split_at(pos),
        None => (target, ""),
    }
}

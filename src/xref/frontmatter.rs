//! Header block (`---` ... `---`) detection and uid extraction.

use regex::Regex;

/// Marker line opening and closing the header block.
const HEADER_MARKER: &str = "---";

/// Split a document into its header block and body.
///
/// The first line must be the marker; the block ends at the next line that
/// is exactly the marker. A leading BOM is ignored. The returned body is
/// always a suffix of `content`.
///
/// ```ignore
/// let (header, body) = split_header("---\nuid: a\n---\n# Title").unwrap();
/// assert_eq!(header, "uid: a\n");
/// assert_eq!(body, "# Title");
/// ```
pub fn split_header(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != HEADER_MARKER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == HEADER_MARKER {
            return Some((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Reads the declared identifier field from a document header.
#[derive(Debug, Clone)]
pub struct UidExtractor {
    pattern: Regex,
}

impl UidExtractor {
    /// Build an extractor for `field` (usually `uid`).
    pub fn new(field: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"(?m)^{}:(.*)$", regex::escape(field)))?;
        Ok(Self { pattern })
    }

    /// The identifier declared in the header block of `content`, if any.
    ///
    /// Values are trimmed and unquoted; an empty value counts as absent.
    pub fn extract(&self, content: &str) -> Option<String> {
        let (header, _) = split_header(content)?;
        let captures = self.pattern.captures(header)?;
        let value = unquote(captures.get(1)?.as_str().trim());
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(content: &str) -> Option<String> {
        UidExtractor::new("uid").unwrap().extract(content)
    }

    #[test]
    fn test_split_header() {
        let (header, body) = split_header("---\ntitle: Basics\nuid: a\n---\n\n# Body").unwrap();
        assert_eq!(header, "title: Basics\nuid: a\n");
        assert_eq!(body, "\n# Body");
    }

    #[test]
    fn test_split_header_crlf_and_bom() {
        let content = "\u{feff}---\r\nuid: a\r\n---\r\nbody";
        let (header, body) = split_header(content).unwrap();
        assert_eq!(header, "uid: a\r\n");
        assert_eq!(body, "body");
        assert!(content.ends_with(body));
    }

    #[test]
    fn test_split_header_requires_leading_marker() {
        assert!(split_header("# Title\n---\nuid: a\n---\n").is_none());
        assert!(split_header("\n---\nuid: a\n---\n").is_none());
        assert!(split_header("---\nuid: a\nno closing marker").is_none());
    }

    #[test]
    fn test_extract_uid() {
        assert_eq!(
            uid("---\ntitle: Basics\nuid: navigation.basics\n---\n# Basics"),
            Some("navigation.basics".to_string())
        );
        assert_eq!(uid("---\nuid:   spaced.value  \n---\n"), Some("spaced.value".to_string()));
        assert_eq!(uid("---\nuid: \"quoted.uid\"\n---\n"), Some("quoted.uid".to_string()));
        assert_eq!(uid("---\nuid: 'single'\n---\n"), Some("single".to_string()));
    }

    #[test]
    fn test_extract_uid_absent() {
        assert_eq!(uid("# No header\nuid: not.a.header"), None);
        assert_eq!(uid("---\ntitle: No uid\n---\n"), None);
        assert_eq!(uid("---\nuid:\n---\n"), None);
        assert_eq!(uid("---\nuid: \"\"\n---\n"), None);
        // Indented keys belong to a nested mapping, not the header itself
        assert_eq!(uid("---\nmeta:\n  uid: nested\n---\n"), None);
        // Only the header block is searched
        assert_eq!(uid("---\ntitle: x\n---\nuid: body.value\n"), None);
    }

    #[test]
    fn test_custom_field() {
        let extractor = UidExtractor::new("doc-id").unwrap();
        assert_eq!(
            extractor.extract("---\ndoc-id: custom\nuid: other\n---\n"),
            Some("custom".to_string())
        );
    }
}

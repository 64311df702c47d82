//! Markdown link extraction with source line numbers.

use pulldown_cmark::{Event, LinkType, Parser, Tag, TagEnd};

use crate::pipeline::markdown_options;
use crate::xref::split_header;

/// A link as written in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// 1-based line of the link start.
    pub line: usize,
    pub target: String,
    pub text: String,
}

/// Byte offsets of line starts, for offset -> line lookups.
struct LineIndex(Vec<usize>);

impl LineIndex {
    fn new(content: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(pos, _)| pos + 1))
            .collect();
        Self(starts)
    }

    fn line_of(&self, offset: usize) -> usize {
        self.0.partition_point(|&start| start <= offset)
    }
}

/// Every inline, reference and autolink in `content`.
///
/// Images, code spans and fenced code are not links. The header block is
/// skipped but line numbers still count from the top of the file.
pub fn extract_links(content: &str) -> Vec<LinkRecord> {
    let body = split_header(content).map_or(content, |(_, body)| body);
    let base = content.len() - body.len();
    let lines = LineIndex::new(content);

    let mut links = Vec::new();
    let mut open: Option<LinkRecord> = None;

    for (event, range) in Parser::new_ext(body, markdown_options()).into_offset_iter() {
        match event {
            // `<user@example.com>` carries no `mailto:` in its target
            Event::Start(Tag::Link { link_type, .. }) if link_type == LinkType::Email => {}
            Event::Start(Tag::Link { dest_url, .. }) => {
                open = Some(LinkRecord {
                    line: lines.line_of(base + range.start),
                    target: dest_url.into_string(),
                    text: String::new(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(link) = open.as_mut() {
                    link.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(link) = open.take() {
                    links.push(link);
                }
            }
            _ => {}
        }
    }

    links
}

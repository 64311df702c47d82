//! Markdown -> HTML with link transforms applied.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

use super::transform::{IndexStripper, LinkOutcome, LinkTransform, XrefContext, XrefResolver};
use crate::log;
use crate::xref::split_header;

/// Markdown extensions understood by the renderer and the link verifier.
///
/// Tables, footnotes, strikethrough, task lists and `{#custom-id}` heading
/// attributes. Both sides must parse the same syntax, otherwise a link the
/// verifier accepts could render as plain text.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Output of [`RenderPipeline::render`].
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub html: String,
    /// Uids referenced but missing from the mapping, in document order.
    pub unresolved: Vec<String>,
}

/// Ordered link transforms over a pulldown-cmark event stream.
pub struct RenderPipeline<'a> {
    transforms: Vec<Box<dyn LinkTransform + 'a>>,
}

impl<'a> RenderPipeline<'a> {
    /// Resolver first, then the index stripper.
    pub fn new(ctx: &'a XrefContext) -> Self {
        Self {
            transforms: vec![
                Box::new(XrefResolver::new(ctx)),
                Box::new(IndexStripper::new(ctx)),
            ],
        }
    }

    /// Run every transform over one link target.
    ///
    /// Returns the new target, or `None` when the link stays as written.
    /// Unresolved references are logged and collected, never fatal.
    pub fn rewrite_dest(&self, dest: &str, unresolved: &mut Vec<String>) -> Option<String> {
        let mut current: Option<String> = None;
        for transform in &self.transforms {
            let input = current.as_deref().unwrap_or(dest);
            match transform.transform(input) {
                LinkOutcome::Keep => {}
                LinkOutcome::Rewrite(next) => {
                    crate::debug!(transform.name(); "{} -> {}", input, next);
                    current = Some(next);
                }
                LinkOutcome::Unresolved(uid) => {
                    log!("xref"; "uid not found in mapping: {}", uid);
                    unresolved.push(uid);
                }
            }
        }
        current
    }

    /// Apply the transforms to every link start event.
    pub fn rewrite_events<'e>(
        &self,
        events: impl Iterator<Item = Event<'e>>,
        unresolved: &mut Vec<String>,
    ) -> Vec<Event<'e>> {
        events
            .map(|event| match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    let dest_url = match self.rewrite_dest(&dest_url, unresolved) {
                        Some(next) => CowStr::from(next),
                        None => dest_url,
                    };
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    })
                }
                other => other,
            })
            .collect()
    }

    /// Render a document body (header block removed) to an HTML fragment.
    pub fn render(&self, markdown: &str) -> Rendered {
        let body = split_header(markdown).map_or(markdown, |(_, body)| body);
        let parser = Parser::new_ext(body, markdown_options());

        let mut unresolved = Vec::new();
        let events = self.rewrite_events(parser, &mut unresolved);

        let mut html = String::with_capacity(body.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        Rendered { html, unresolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::transform::test_context;

    #[test]
    fn test_render_resolves_xref() {
        let ctx = test_context(&[("navigation.basics", "/docs/navigation/basics")]);
        let rendered = RenderPipeline::new(&ctx)
            .render("---\nuid: other\n---\nSee [Basics](xref:navigation.basics).\n");

        assert!(
            rendered
                .html
                .contains(r#"<a href="/docs/navigation/basics">Basics</a>"#)
        );
        assert!(rendered.unresolved.is_empty());
        assert!(!rendered.html.contains("uid: other"));
    }

    #[test]
    fn test_unresolved_passes_through() {
        let ctx = test_context(&[]);
        let pipeline = RenderPipeline::new(&ctx);

        let mut unresolved = Vec::new();
        assert_eq!(pipeline.rewrite_dest("xref:missing.uid", &mut unresolved), None);
        assert_eq!(unresolved, vec!["missing.uid"]);

        let rendered = pipeline.render("[Broken](xref:missing.uid)");
        assert!(rendered.html.contains(r#"href="xref:missing.uid""#));
        assert_eq!(rendered.unresolved, vec!["missing.uid"]);
    }

    #[test]
    fn test_stripper_runs_after_resolver() {
        let ctx = test_context(&[("commands.overview", "/docs/commands/index")]);
        let pipeline = RenderPipeline::new(&ctx);

        let mut unresolved = Vec::new();
        assert_eq!(
            pipeline.rewrite_dest("xref:commands.overview", &mut unresolved),
            Some("/docs/commands".to_string())
        );
        assert_eq!(
            pipeline.rewrite_dest("/docs/navigation/index", &mut unresolved),
            Some("/docs/navigation".to_string())
        );
        assert_eq!(pipeline.rewrite_dest("./basics.md", &mut unresolved), None);
        assert!(unresolved.is_empty());
    }

    #[test]
    fn test_links_are_independent() {
        let ctx = test_context(&[("a", "/docs/a"), ("b", "/docs/b/index")]);
        let rendered = RenderPipeline::new(&ctx)
            .render("- [A](xref:a)\n- [X](xref:x)\n- [B](xref:b)\n- [Web](https://example.com)\n");

        assert!(rendered.html.contains(r#"href="/docs/a""#));
        assert!(rendered.html.contains(r#"href="xref:x""#));
        assert!(rendered.html.contains(r#"href="/docs/b""#));
        assert!(rendered.html.contains(r#"href="https://example.com""#));
        assert_eq!(rendered.unresolved, vec!["x"]);
    }

    #[test]
    fn test_reference_style_links() {
        let ctx = test_context(&[("a", "/docs/a")]);
        let rendered = RenderPipeline::new(&ctx).render("See [the page][ref].\n\n[ref]: xref:a\n");
        assert!(rendered.html.contains(r#"<a href="/docs/a">the page</a>"#));
    }
}

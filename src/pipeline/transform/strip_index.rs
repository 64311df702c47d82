//! Trailing `/index` removal for internal docs links.

use super::{LinkOutcome, LinkTransform, XrefContext};
use crate::xref::strip_index_suffix;

/// Normalizes `<prefix>/.../index` links regardless of where they came from.
pub struct IndexStripper<'a> {
    ctx: &'a XrefContext,
}

impl<'a> IndexStripper<'a> {
    pub fn new(ctx: &'a XrefContext) -> Self {
        Self { ctx }
    }

    fn is_docs_route(&self, dest: &str) -> bool {
        let prefix = self.ctx.route_prefix.trim_end_matches('/');
        dest.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl LinkTransform for IndexStripper<'_> {
    fn name(&self) -> &'static str {
        "strip-index"
    }

    fn transform(&self, dest: &str) -> LinkOutcome {
        if !self.is_docs_route(dest) {
            return LinkOutcome::Keep;
        }
        let stripped = strip_index_suffix(dest);
        if stripped.len() == dest.len() {
            LinkOutcome::Keep
        } else {
            LinkOutcome::Rewrite(stripped.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::transform::test_context;

    #[test]
    fn test_strips_docs_index_links() {
        let ctx = test_context(&[]);
        let stripper = IndexStripper::new(&ctx);
        assert_eq!(
            stripper.transform("/docs/commands/index"),
            LinkOutcome::Rewrite("/docs/commands".to_string())
        );
        assert_eq!(
            stripper.transform("/docs/index"),
            LinkOutcome::Rewrite("/docs".to_string())
        );
    }

    #[test]
    fn test_leaves_other_links() {
        let ctx = test_context(&[]);
        let stripper = IndexStripper::new(&ctx);
        for dest in [
            "/docs/commands",
            "/blog/index",
            "/docsite/index",
            "./commands/index",
            "https://example.com/docs/index",
            "xref:commands.overview",
        ] {
            assert_eq!(stripper.transform(dest), LinkOutcome::Keep, "dest: {dest}");
        }
    }

    #[test]
    fn test_idempotent() {
        let ctx = test_context(&[]);
        let stripper = IndexStripper::new(&ctx);
        let LinkOutcome::Rewrite(once) = stripper.transform("/docs/a/index/index") else {
            panic!("expected rewrite");
        };
        assert_eq!(once, "/docs/a");
        assert_eq!(stripper.transform(&once), LinkOutcome::Keep);
    }
}

//! `xref:<uid>` resolution.

use super::{LinkOutcome, LinkTransform, XrefContext};

/// Rewrites reference-scheme links to the route in the mapping.
pub struct XrefResolver<'a> {
    ctx: &'a XrefContext,
}

impl<'a> XrefResolver<'a> {
    pub fn new(ctx: &'a XrefContext) -> Self {
        Self { ctx }
    }
}

impl LinkTransform for XrefResolver<'_> {
    fn name(&self) -> &'static str {
        "xref"
    }

    fn transform(&self, dest: &str) -> LinkOutcome {
        let Some(uid) = dest.strip_prefix(self.ctx.scheme.as_str()) else {
            return LinkOutcome::Keep;
        };
        match self.ctx.resolve_uid(uid) {
            Some(route) => LinkOutcome::Rewrite(route.to_string()),
            None => LinkOutcome::Unresolved(uid.to_string()),
        }
    }
}

//! `docref resolve`: look uids up in the mapping artifact.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::DocsConfig;
use crate::log;
use crate::pipeline::XrefContext;

/// Route for every uid, in input order. `None` for misses.
pub fn resolve_uids<'a>(ctx: &'a XrefContext, uids: &'a [String]) -> Vec<(&'a str, Option<&'a str>)> {
    uids.iter()
        .map(|uid| (uid.as_str(), ctx.resolve_uid(uid)))
        .collect()
}

pub fn print_routes(uids: &[String], config: &DocsConfig) -> Result<()> {
    let ctx = XrefContext::load(config);
    for (uid, route) in resolve_uids(&ctx, uids) {
        match route {
            Some(route) => println!("{} {} {}", uid, "->".dimmed(), route.cyan()),
            None => log!("xref"; "uid not found in mapping: {}", uid),
        }
    }
    Ok(())
}

//! `docref verify`: check relative links in every docs tree.

mod report;

pub use report::VerifyReport;

use anyhow::{Result, bail};

use crate::config::DocsConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::verify::{Tree, Verifier};

/// Scan the docs and versioned trees. Missing trees are skipped.
pub fn collect_trees(config: &DocsConfig) -> Vec<Tree> {
    let ext = &config.verify.extension;
    [
        (&config.content.docs, config.docs_dir()),
        (&config.content.versioned, config.versioned_dir()),
    ]
    .into_iter()
    .filter_map(|(name, root)| {
        let label = crate::utils::path::to_slash(name);
        let tree = Tree::scan(label, &root, ext);
        match &tree {
            Some(tree) if tree.is_empty() => {
                log!("verify"; "{} has no .{} files", root.display(), ext);
            }
            Some(_) => {}
            None => log!("verify"; "skipping {}: not found", root.display()),
        }
        tree
    })
    .collect()
}

/// Verify every tree and collect the report.
pub fn verify_trees(trees: &[Tree], verifier: &Verifier) -> VerifyReport {
    let counters: Vec<(&str, usize)> = trees.iter().map(|t| (t.label.as_str(), t.len())).collect();
    let progress = ProgressLine::new("verify", &counters);

    let mut report = VerifyReport::default();
    for tree in trees {
        let issues = verifier.verify_tree(tree, Some(&progress));
        report.extend(&tree.label, issues);
    }

    progress.finish();
    report
}

/// Run the verifier and print the report.
///
/// Report-only unless `strict` is set, in which case errors fail the command.
pub fn verify_links(config: &DocsConfig) -> Result<()> {
    let trees = collect_trees(config);
    if trees.is_empty() {
        log!("verify"; "no docs trees found");
        return Ok(());
    }

    let total: usize = trees.iter().map(Tree::len).sum();
    log!("verify"; "found {}", plural_count(total, "markdown file"));

    let verifier = Verifier::new(&config.verify);
    let report = verify_trees(&trees, &verifier);
    report.print();

    if config.verify.strict && report.has_errors() {
        bail!(
            "link verification failed: {}",
            plural_count(report.error_count(), "error")
        );
    }
    Ok(())
}

//! `docref downloads`: total package downloads for an owner.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::DownloadsArgs;
use crate::config::DocsConfig;
use crate::downloads::{DownloadCache, DownloadCounter, format_millions};
use crate::{debug, log};

pub fn show_downloads(args: &DownloadsArgs, config: &DocsConfig) -> Result<()> {
    let settings = &config.downloads;
    let owner = settings.owner.as_str();
    let cache = DownloadCache::new(config.downloads_cache_path(), settings.ttl());

    if args.clear_all {
        cache.clear_all();
        log!("downloads"; "cleared {}", cache.path().display());
        return Ok(());
    }
    if args.clear {
        if cache.clear(owner) {
            log!("downloads"; "cache cleared for {}", owner);
        } else {
            log!("downloads"; "nothing cached for {}", owner);
        }
        return Ok(());
    }
    if args.refresh {
        cache.clear(owner);
    }

    debug!("downloads"; "cache at {}", cache.path().display());
    let counter = DownloadCounter::from_config(settings, cache)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let total = runtime
        .block_on(counter.total_downloads(owner))
        .with_context(|| format!("failed to count downloads for {owner}"))?;

    println!(
        "{} {} {}",
        owner.cyan(),
        total.to_string().bold(),
        format!("({})", format_millions(total)).dimmed()
    );
    Ok(())
}

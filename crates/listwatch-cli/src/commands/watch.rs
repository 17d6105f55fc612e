//! The watch command: fetch the page, report listings never seen before.

use anyhow::Result;
use listwatch_core::{extract_links, scan_links, Config, Fetcher, SeenStore};
use tracing::debug;

/// Runs one watch pass.
///
/// A missing `SEARCH_URL` is a benign early exit: the notice goes to stdout
/// and the process ends cleanly before any fetch or store I/O. Every other
/// failure (network, parse, storage) propagates out and terminates the run
/// with a diagnostic.
pub async fn watch(config: Config) -> Result<()> {
    let Some(search_url) = config.search_url.clone() else {
        println!("SEARCH_URL environment variable is required");
        return Ok(());
    };

    let store = SeenStore::open(&config.db_path)?;
    let fetcher = Fetcher::new()?;

    let body = fetcher.fetch(&search_url).await?;
    let links = extract_links(&body);
    debug!("extracted {} links from {search_url}", links.len());

    let new_listings = scan_links(
        &links,
        &config.criteria(),
        config.id_policy,
        &config.start_url,
        &store,
    )?;

    for listing in &new_listings {
        println!("NEW LISTING: {} (ID: {})", listing.href, listing.id);
    }

    debug!(
        "run complete: {} new, {} recorded overall",
        new_listings.len(),
        store.len()?
    );

    Ok(())
}

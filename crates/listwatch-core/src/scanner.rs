//! The per-link processing loop: filter, normalize, dedupe, emit.

use crate::filter::{FilterCriteria, NewListing};
use crate::normalizer::{self, IdPolicy};
use crate::store::SeenStore;
use crate::Result;
use tracing::debug;

/// Runs every raw link through the filter and the seen-set store, returning
/// an event for each listing not previously recorded.
///
/// The store is an explicit parameter and each link is handled in a plain
/// loop, so the check-then-mark sequence is visible here: `is_new` and `mark`
/// are separate calls, and an interruption between them re-emits that
/// identifier on the next run (at-least-once reporting).
pub fn scan_links<I, S>(
    links: I,
    criteria: &FilterCriteria,
    policy: IdPolicy,
    base: &str,
    store: &SeenStore,
) -> Result<Vec<NewListing>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut discovered = Vec::new();

    for link in links {
        let href = link.as_ref();
        if !criteria.matches(href) {
            continue;
        }

        let id = normalizer::normalize(href, base, policy);
        if store.is_new(&id)? {
            debug!("new listing {id} ({href})");
            discovered.push(NewListing {
                href: href.to_string(),
                id: id.clone(),
            });
            store.mark(&id)?;
        } else {
            debug!("already seen {id}");
        }
    }

    Ok(discovered)
}

//! Anchor extraction from fetched HTML.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ANCHOR: Lazy<Selector> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Selector::parse("a").expect("anchor selector")
});

/// Extracts the `href` attribute of every anchor element in `html`, in
/// document order. An anchor without an `href` contributes an empty string.
///
/// scraper is lenient: malformed or non-HTML input simply yields whatever
/// anchors (possibly none) the recovering parser finds.
#[must_use]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .map(|a| a.value().attr("href").unwrap_or_default().to_string())
        .collect()
}

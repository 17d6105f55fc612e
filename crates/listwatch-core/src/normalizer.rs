//! Identifier derivation for listing links.
//!
//! The normalizer maps a raw `href` (plus the configured base URL) to the
//! canonical identifier used for deduplication. The same logical listing is
//! often reachable through several URL forms - relative vs. absolute, with or
//! without trailing path segments - and the identifier has to be stable across
//! all of them.

use once_cell::sync::Lazy;
use regex::Regex;

/// First run of decimal digits forming a whole path segment, e.g. the
/// `12345` in `/listings/12345/view` or `/listings/12345`.
static PATH_ID: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"/(\d+)(/|$)").expect("path id regex")
});

/// How a resolved link is reduced to an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Extract the first all-digit path segment; fall back to the full
    /// resolved URL when none exists. Matches the behavior listing sites with
    /// numeric item ids need, and is the default.
    #[default]
    Numeric,
    /// Use the resolved URL verbatim. Different query strings or path depths
    /// yield different identifiers.
    Raw,
}

/// Derives the canonical identifier for a raw `href`.
///
/// Relative links (those starting with `/`) are resolved against `base` by
/// concatenation before the policy applies. Deterministic and
/// side-effect-free: identical `(href, base, policy)` always produces the same
/// identifier. An empty `href` yields the (possibly empty) resolved string;
/// that is a degenerate but accepted key, not an error.
#[must_use]
pub fn normalize(href: &str, base: &str, policy: IdPolicy) -> String {
    let resolved = resolve(href, base);
    match policy {
        IdPolicy::Raw => resolved,
        IdPolicy::Numeric => PATH_ID
            .captures(&resolved)
            .and_then(|caps| caps.get(1))
            .map_or(resolved.clone(), |m| m.as_str().to_string()),
    }
}

/// Resolves a possibly-relative `href` against `base`.
///
/// Resolution is plain concatenation, not RFC 3986 reference resolution:
/// the base is expected to be a site root without a trailing slash.
fn resolve(href: &str, base: &str) -> String {
    if href.starts_with('/') {
        format!("{base}{href}")
    } else {
        href.to_string()
    }
}

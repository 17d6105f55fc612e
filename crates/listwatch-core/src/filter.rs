//! Substring filtering of extracted links.

/// Inclusion/exclusion criteria applied to each raw link.
///
/// The default expression is `contains(term1) OR (contains(term2) AND NOT
/// contains(exclude))` - note the precedence: OR binds looser than AND, so a
/// link matching `term1` is included even when it also matches the exclude
/// term, while a `term2` match is suppressed by it. The asymmetry is
/// long-standing observed behavior and is kept as the default;
/// [`strict_exclude`](Self::strict_exclude) applies the exclude term to both
/// inclusion terms instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    term1: String,
    term2: String,
    exclude: String,
    strict_exclude: bool,
}

impl FilterCriteria {
    /// Builds criteria with the default (asymmetric) exclude behavior.
    #[must_use]
    pub fn new(term1: impl Into<String>, term2: impl Into<String>, exclude: impl Into<String>) -> Self {
        Self {
            term1: term1.into(),
            term2: term2.into(),
            exclude: exclude.into(),
            strict_exclude: false,
        }
    }

    /// Applies the exclude term uniformly to both inclusion terms.
    #[must_use]
    pub fn with_strict_exclude(mut self, strict: bool) -> Self {
        self.strict_exclude = strict;
        self
    }

    /// Whether `href` passes the criteria.
    #[must_use]
    pub fn matches(&self, href: &str) -> bool {
        if self.strict_exclude {
            (href.contains(&self.term1) || href.contains(&self.term2))
                && !href.contains(&self.exclude)
        } else {
            href.contains(&self.term1)
                || (href.contains(&self.term2) && !href.contains(&self.exclude))
        }
    }
}

/// A listing reported for the first time: the original href and the
/// identifier derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    /// Link text exactly as found on the page.
    pub href: String,
    /// Canonical identifier recorded in the seen-set store.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> FilterCriteria {
        FilterCriteria::new("foo", "bar", "baz")
    }

    #[test]
    fn term1_match_ignores_exclude() {
        assert!(criteria().matches("foo/baz"));
    }

    #[test]
    fn term2_match_is_suppressed_by_exclude() {
        assert!(!criteria().matches("bar/baz"));
    }

    #[test]
    fn term2_match_without_exclude_passes() {
        assert!(criteria().matches("bar/qux"));
    }

    #[test]
    fn no_term_match_fails() {
        assert!(!criteria().matches("qux/quux"));
    }

    #[test]
    fn strict_mode_excludes_uniformly() {
        let strict = criteria().with_strict_exclude(true);

        assert!(!strict.matches("foo/baz"));
        assert!(!strict.matches("bar/baz"));
        assert!(strict.matches("foo/qux"));
        assert!(strict.matches("bar/qux"));
    }
}

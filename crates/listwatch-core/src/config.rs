//! Run configuration.
//!
//! All environment lookups happen once, at startup, in the CLI layer; the
//! resulting [`Config`] is passed into the filter, normalizer, and store as a
//! plain value so every component stays testable without a live environment.

use crate::filter::FilterCriteria;
use crate::normalizer::IdPolicy;
use std::path::PathBuf;

/// Default store location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "scrape.db";

/// Everything a single run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL that relative links are resolved against (`START_URL`).
    pub start_url: String,
    /// Page to fetch (`SEARCH_URL`). Absence is a benign early exit, not an
    /// error, so it stays optional here.
    pub search_url: Option<String>,
    /// First inclusion substring (`SEARCH_TERM_1`).
    pub term1: String,
    /// Second inclusion substring (`SEARCH_TERM_2`).
    pub term2: String,
    /// Exclusion substring (`EXCLUDE_TERM_1`).
    pub exclude: String,
    /// Apply the exclude term to both inclusion terms instead of only the
    /// second.
    pub strict_exclude: bool,
    /// Identifier derivation policy.
    pub id_policy: IdPolicy,
    /// Seen-set store location.
    pub db_path: PathBuf,
}

impl Config {
    /// Filter criteria for this run.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.term1, &self.term2, &self.exclude)
            .with_strict_exclude(self.strict_exclude)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            search_url: None,
            term1: String::new(),
            term2: String::new(),
            exclude: String::new(),
            strict_exclude: false,
            id_policy: IdPolicy::default(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_numeric_policy_and_relative_db() {
        let config = Config::default();
        assert_eq!(config.id_policy, IdPolicy::Numeric);
        assert_eq!(config.db_path, PathBuf::from("scrape.db"));
        assert!(config.search_url.is_none());
    }

    #[test]
    fn criteria_carries_strict_flag() {
        let config = Config {
            term1: "foo".into(),
            term2: "bar".into(),
            exclude: "baz".into(),
            strict_exclude: true,
            ..Config::default()
        };

        assert!(!config.criteria().matches("foo/baz"));
    }
}
